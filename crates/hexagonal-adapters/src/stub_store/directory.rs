//! Stubs read from a user-supplied directory.

use std::path::PathBuf;

use hexagonal_core::{
    application::{ApplicationError, ports::StubStore},
    error::HexResult,
};
use tracing::debug;
use walkdir::WalkDir;

/// Reads `<root>/<name>` on every lookup.
///
/// Replaces the bundled set entirely: a stub missing from the directory is
/// missing, not taken from the bundle.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    root: PathBuf,
}

impl DirectoryStubStore {
    /// Open a stub directory. Fails if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> HexResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ApplicationError::StubStoreError {
                reason: format!("'{}' is not a directory", root.display()),
            }
            .into());
        }
        Ok(Self { root })
    }
}

impl StubStore for DirectoryStubStore {
    fn get(&self, name: &str) -> HexResult<Option<String>> {
        let path = self.root.join(name);
        if !path.is_file() {
            debug!(path = %path.display(), "Stub not present");
            return Ok(None);
        }
        std::fs::read_to_string(&path).map(Some).map_err(|e| {
            ApplicationError::StubStoreError {
                reason: format!("Failed to read {}: {}", path.display(), e),
            }
            .into()
        })
    }

    fn names(&self) -> HexResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::StubStoreError {
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stubs_from_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("PROJECT_MEMORY.stub"), "# {{ PROJECT_NAME }}").unwrap();
        std::fs::create_dir(tmp.path().join("nested")).unwrap();

        let store = DirectoryStubStore::open(tmp.path()).unwrap();
        assert_eq!(
            store.get("PROJECT_MEMORY.stub").unwrap().as_deref(),
            Some("# {{ PROJECT_NAME }}")
        );
        assert_eq!(store.get("CODING_STANDARDS.stub").unwrap(), None);
        assert_eq!(store.names().unwrap(), ["PROJECT_MEMORY.stub"]);
    }

    #[test]
    fn open_rejects_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(DirectoryStubStore::open(tmp.path().join("absent")).is_err());
    }
}
