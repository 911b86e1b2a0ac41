//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: the view of one live filesystem entry that a directory
//!   walker (local or on a remote agent) hands to the use cases.
//!
//! Implementations live with the walker; this workspace only ships the
//! in-memory [`filesystem::EntrySnapshot`].

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::{EntryHandle, EntrySnapshot};
