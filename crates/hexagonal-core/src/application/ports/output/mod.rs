//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::RelativePath;
use crate::error::HexResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexagonal_adapters::filesystem::LocalFilesystem` (production)
/// - `hexagonal_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths passed in are already joined onto the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents with the given Unix mode.
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path, mode: u32) -> HexResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> HexResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> HexResult<()>;

    fn remove_file(&self, path: &Path) -> HexResult<()>;

    /// `true` if the directory has no entries.
    fn is_empty_dir(&self, path: &Path) -> HexResult<bool>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> HexResult<()>;
}

/// Port for template stub lookup.
///
/// Implemented by:
/// - `hexagonal_adapters::stub_store::BundledStubStore` (compiled-in stubs)
/// - `hexagonal_adapters::stub_store::DirectoryStubStore` (user overrides)
/// - `hexagonal_adapters::stub_store::InMemoryStubStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Fetch a stub's raw text. `Ok(None)` means the store has no stub with
    /// that name, which callers treat as a soft skip.
    fn get(&self, name: &str) -> HexResult<Option<String>>;

    /// Names of all stubs in the store, sorted.
    fn names(&self) -> HexResult<Vec<String>>;
}

/// Progress notices emitted while installing.
///
/// Every method defaults to doing nothing so a reporter only overrides what
/// it shows.
pub trait InstallReporter {
    fn directory_created(&mut self, _path: &RelativePath) {}

    fn file_generated(&mut self, _path: &RelativePath) {}

    /// A declared stub was not found; the artifact is skipped.
    fn stub_missing(&mut self, _stub: &str) {}

    /// All context artifacts were processed.
    fn context_generated(&mut self) {}

    fn model_relocated(&mut self, _destination: &RelativePath) {}

    fn auth_config_patched(&mut self, _path: &RelativePath) {}

    fn manifest_patched(&mut self, _path: &RelativePath) {}
}

/// Reporter that discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl InstallReporter for NullReporter {}
