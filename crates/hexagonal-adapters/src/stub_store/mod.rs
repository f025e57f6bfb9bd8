//! Stub store adapters.

mod bundled;
mod directory;
mod memory;

pub use bundled::BundledStubStore;
pub use directory::DirectoryStubStore;
pub use memory::InMemoryStubStore;
