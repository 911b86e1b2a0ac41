// crates/ports/src/filesystem.rs
use fileentry_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// A live filesystem entry as seen by the walker that found it.
///
/// `remote` is the entry's full identifier on the host that owns it. Metadata
/// queries may touch that host, so they are fallible.
pub trait EntryHandle: Send + Sync {
    /// Base name of the entry.
    fn name(&self) -> &str;
    /// Full identifier, including the base location as a prefix.
    fn remote(&self) -> &str;
    fn is_directory(&self) -> Result<bool>;
    fn length(&self) -> Result<i64>;
    fn last_modified(&self) -> Result<i64>;
}

impl<T: EntryHandle + ?Sized> EntryHandle for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn remote(&self) -> &str {
        (**self).remote()
    }

    fn is_directory(&self) -> Result<bool> {
        (**self).is_directory()
    }

    fn length(&self) -> Result<i64> {
        (**self).length()
    }

    fn last_modified(&self) -> Result<i64> {
        (**self).last_modified()
    }
}

impl<T: EntryHandle + ?Sized> EntryHandle for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn remote(&self) -> &str {
        (**self).remote()
    }

    fn is_directory(&self) -> Result<bool> {
        (**self).is_directory()
    }

    fn length(&self) -> Result<i64> {
        (**self).length()
    }

    fn last_modified(&self) -> Result<i64> {
        (**self).last_modified()
    }
}

/// Metadata captured once, detached from the host it was read on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshot {
    pub name: String,
    pub remote: String,
    #[serde(rename = "directory")]
    pub is_directory: bool,
    pub length: i64,
    pub last_modified: i64,
}

impl EntrySnapshot {
    /// Snapshot of a regular file; the name is taken from the last segment of `remote`.
    pub fn file(remote: impl Into<String>, length: i64, last_modified: i64) -> Self {
        let remote = remote.into();
        Self { name: base_name(&remote).to_string(), remote, is_directory: false, length, last_modified }
    }

    /// Snapshot of a directory; `length` is reported as zero.
    pub fn directory(remote: impl Into<String>, last_modified: i64) -> Self {
        let remote = remote.into();
        Self { name: base_name(&remote).to_string(), remote, is_directory: true, length: 0, last_modified }
    }
}

impl EntryHandle for EntrySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn remote(&self) -> &str {
        &self.remote
    }

    fn is_directory(&self) -> Result<bool> {
        Ok(self.is_directory)
    }

    fn length(&self) -> Result<i64> {
        Ok(self.length)
    }

    fn last_modified(&self) -> Result<i64> {
        Ok(self.last_modified)
    }
}

fn base_name(remote: &str) -> &str {
    let trimmed = remote.trim_end_matches(fileentry_shared_kernel::is_separator);
    trimmed.rsplit(fileentry_shared_kernel::is_separator).next().unwrap_or(trimmed)
}
