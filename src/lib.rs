//! Serializable filesystem entry descriptors.
//!
//! A [`FileEntryDescriptor`] carries the name, base-relative path, type,
//! length and modification time of one file or directory. Directory paths
//! always end with `/`, and descriptors are equal exactly when their paths
//! are. Walkers turn live entries into descriptors with [`describe`] or
//! [`DescribeEntries`]; [`wire`] moves them across a process boundary.

#![allow(clippy::multiple_crate_versions)]

pub mod wire;

pub use fileentry_ports::{EntryHandle, EntrySnapshot};
pub use fileentry_shared_kernel::{
    DIRECTORY_SEPARATOR, DomainError, ErrorContext, FileEntryDescriptor, FileEntryError, InfrastructureError,
    RelativeEntry, Result,
};
pub use fileentry_usecase::{DescribeEntries, describe, relative_entry, relative_path};
pub use wire::{WireConfig, WireFormat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
