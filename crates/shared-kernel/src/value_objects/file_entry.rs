// crates/shared-kernel/src/value_objects/file_entry.rs
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::path::normalize_entry_path;

/// Metadata about one file or directory, relative to some base location.
///
/// Identity is the normalized path: two descriptors are equal, and hash
/// equally, whenever their paths match, even if name, type, length or
/// timestamp differ. Directory paths always end with `/`.
///
/// The value is immutable once built and is meant to be shipped across a
/// process boundary; deserialization re-applies the directory rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RelativeEntry")]
#[serde(rename_all = "camelCase")]
pub struct FileEntryDescriptor {
    name: String,
    path: String,
    #[serde(rename = "directory")]
    is_directory: bool,
    length: i64,
    last_modified: i64,
}

impl FileEntryDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        is_directory: bool,
        length: i64,
        last_modified: i64,
    ) -> Self {
        let path = normalize_entry_path(path.into(), is_directory);
        Self { name: name.into(), path, is_directory, length, last_modified }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized path; ends with `/` for directories.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    #[inline]
    pub const fn length(&self) -> i64 {
        self.length
    }

    #[inline]
    pub const fn last_modified(&self) -> i64 {
        self.last_modified
    }

    /// `last_modified` read as milliseconds since the Unix epoch.
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_modified)
    }
}

impl PartialEq for FileEntryDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileEntryDescriptor {}

impl Hash for FileEntryDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl Borrow<str> for FileEntryDescriptor {
    fn borrow(&self) -> &str {
        &self.path
    }
}

impl AsRef<str> for FileEntryDescriptor {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for FileEntryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Raw constructor inputs derived for a target below a base location.
///
/// `path` is not normalized yet; converting into a [`FileEntryDescriptor`]
/// applies the directory rule. Also the shape accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "directory")]
    pub is_directory: bool,
    pub length: i64,
    pub last_modified: i64,
}

impl From<RelativeEntry> for FileEntryDescriptor {
    fn from(entry: RelativeEntry) -> Self {
        Self::new(entry.name, entry.path, entry.is_directory, entry.length, entry.last_modified)
    }
}
