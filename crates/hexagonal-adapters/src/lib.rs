//! Infrastructure adapters for the installer.
//!
//! This crate implements the ports defined in `hexagonal-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use stub_store::{BundledStubStore, DirectoryStubStore, InMemoryStubStore};
