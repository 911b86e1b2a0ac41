// crates/usecase/src/describe.rs
use std::collections::HashSet;

use fileentry_ports::filesystem::EntryHandle;
use fileentry_shared_kernel::{FileEntryDescriptor, Result};

use crate::relative::describe;

/// Describes every target a walker found below one base location.
///
/// Output keeps input order. A target whose normalized path was already
/// described is skipped, so the result never holds two equal descriptors.
pub struct DescribeEntries<'a> {
    base: &'a str,
}

impl<'a> DescribeEntries<'a> {
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &str {
        self.base
    }

    /// Stops at the first target that cannot be described.
    pub fn run<I>(&self, targets: I) -> Result<Vec<FileEntryDescriptor>>
    where
        I: IntoIterator,
        I::Item: EntryHandle,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        for target in targets {
            let entry = describe(self.base, &target)?;
            if !seen.insert(entry.path().to_string()) {
                log::debug!("skipping duplicate entry '{}' from '{}'", entry, target.remote());
                continue;
            }
            log::trace!("described '{}' below '{}'", entry, self.base);
            entries.push(entry);
        }
        log::debug!("described {} entries below '{}'", entries.len(), self.base);
        Ok(entries)
    }
}
