//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use hexagonal_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HexError, HexResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path, mode: u32) -> HexResult<()> {
        // Ancestors that do not exist yet, outermost first.
        let missing: Vec<PathBuf> = path
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
            .map(Path::to_path_buf)
            .collect();

        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))?;

        // The process umask may have narrowed the requested mode.
        for dir in missing.iter().rev() {
            set_mode(dir, mode)?;
        }
        trace!(path = %path.display(), created = missing.len(), "Directories created");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> HexResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HexResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_file(&self, path: &Path) -> HexResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn is_empty_dir(&self, path: &Path) -> HexResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }

    fn remove_dir(&self, path: &Path) -> HexResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> HexResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> HexResult<()> {
    // No Unix mode bits on this platform.
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> HexError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let leaf = tmp.path().join("src/Domain/Entities");

        fs.create_dir_all(&leaf, 0o755).unwrap();

        assert!(fs.is_dir(&leaf));
        #[cfg(unix)]
        {
            assert_eq!(mode_of(&leaf), 0o755);
            assert_eq!(mode_of(&tmp.path().join("src")), 0o755);
        }
    }

    #[test]
    fn create_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let leaf = tmp.path().join("tests/Unit/Domain");

        fs.create_dir_all(&leaf, 0o755).unwrap();
        fs.create_dir_all(&leaf, 0o755).unwrap();
        assert!(fs.is_dir(&leaf));
    }

    #[test]
    fn existing_ancestors_keep_their_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        #[cfg(unix)]
        let before = mode_of(tmp.path());

        fs.create_dir_all(&tmp.path().join("src"), 0o755).unwrap();

        #[cfg(unix)]
        assert_eq!(mode_of(tmp.path()), before);
    }

    #[test]
    fn empty_dir_detection_and_removal() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("app/Models");
        fs.create_dir_all(&dir, 0o755).unwrap();
        fs.write_file(&dir.join("Post.php"), "<?php").unwrap();

        assert!(!fs.is_empty_dir(&dir).unwrap());
        fs.remove_file(&dir.join("Post.php")).unwrap();
        assert!(fs.is_empty_dir(&dir).unwrap());
        fs.remove_dir(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn io_errors_carry_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let missing = tmp.path().join("nope.txt");

        let err = fs.read_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
