//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use hexagonal_core::{
    application::{ApplicationError, ports::Filesystem},
    error::HexResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    /// Directory → mode it was created with.
    directories: BTreeMap<PathBuf, u32>,
}

impl MemoryFilesystemInner {
    fn has_children(&self, dir: &Path) -> bool {
        self.files.keys().any(|p| p.parent() == Some(dir))
            || self.directories.keys().any(|p| p.parent() == Some(dir))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories with mode `0o755`.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent, 0o755);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Mode a directory was created with.
    pub fn mode_of(&self, path: &Path) -> Option<u32> {
        let inner = self.inner.read().ok()?;
        inner.directories.get(path).copied()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path, mode: u32) -> HexResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Failed to create directory: a file is in the way".into(),
                }
                .into());
            }
            inner.directories.entry(current.clone()).or_insert(mode);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains_key(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> HexResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> HexResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains_key(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> HexResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.remove(path).map(|_| ()).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove file: not found".into(),
            }
            .into()
        })
    }

    fn is_empty_dir(&self, path: &Path) -> HexResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(!inner.has_children(path))
    }

    fn remove_dir(&self, path: &Path) -> HexResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.has_children(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove directory: not empty".into(),
            }
            .into());
        }
        inner.directories.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_records_ancestors_and_mode() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("app/src/Domain"), 0o755).unwrap();

        assert!(fs.is_dir(Path::new("app")));
        assert!(fs.is_dir(Path::new("app/src")));
        assert_eq!(fs.mode_of(Path::new("app/src/Domain")), Some(0o755));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("missing/file.md"), "x").is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_file("app/Models/User.php", "<?php");
        let other = fs.clone();
        other.remove_file(Path::new("app/Models/User.php")).unwrap();

        assert!(!fs.is_file(Path::new("app/Models/User.php")));
        assert!(fs.is_empty_dir(Path::new("app/Models")).unwrap());
    }

    #[test]
    fn non_empty_dir_cannot_be_removed() {
        let fs = MemoryFilesystem::new().with_file("app/Models/Post.php", "<?php");
        assert!(fs.remove_dir(Path::new("app/Models")).is_err());
    }
}
