use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Unix mode for every directory the installer creates: `rwxr-xr-x`.
pub const DIRECTORY_MODE: u32 = 0o755;

/// A filesystem path guaranteed to be **relative** to the project root.
///
/// Every path the installer touches is declared relative and only joined
/// onto the base path at the last moment, so nothing can be written outside
/// the project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Try to create a relative path.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Join this path onto a project root.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.0)
    }

    /// Last component, used in progress notices.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_paths() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn resolves_against_base() {
        let rel = RelativePath::try_new(".agent/rules/01-architecture.md").unwrap();
        assert_eq!(
            rel.resolve(Path::new("/srv/app")),
            PathBuf::from("/srv/app/.agent/rules/01-architecture.md")
        );
        assert_eq!(rel.file_name(), "01-architecture.md");
    }
}
