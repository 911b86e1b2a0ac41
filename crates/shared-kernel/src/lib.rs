//! # Shared kernel
//!
//! Value objects and the error taxonomy shared by every crate in the
//! workspace. The central type is [`FileEntryDescriptor`].

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, FileEntryError, InfraResult, InfrastructureError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use path::{DIRECTORY_SEPARATOR, is_separator, needs_trailing_separator, normalize_entry_path};
pub use value_objects::{FileEntryDescriptor, RelativeEntry};
