//! # Use Cases
//!
//! Application-level logic that turns entries found below a base location
//! into [`FileEntryDescriptor`](fileentry_shared_kernel::FileEntryDescriptor)s:
//!
//! - [`relative`]: the pure base/target derivation
//! - [`describe`]: describing a walked set of targets
//!
//! Use cases depend on the shared kernel and ports, never on a concrete walker.

#![allow(clippy::multiple_crate_versions)]

pub mod describe;
pub mod relative;

pub use describe::DescribeEntries;
pub use relative::{describe, relative_entry, relative_path};
