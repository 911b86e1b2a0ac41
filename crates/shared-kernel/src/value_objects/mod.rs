// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_entry;

pub use file_entry::{FileEntryDescriptor, RelativeEntry};
