//! Unified error handling for Hexagonal Core.
//!
//! Wraps domain and application errors behind one type so callers only match
//! on [`HexError`], with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for installer operations.
#[derive(Debug, Error, Clone)]
pub enum HexError {
    /// Errors from the domain layer (malformed inputs).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and adapter failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl HexError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HexResult<T> = Result<T, HexError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn filesystem_errors_are_internal() {
        let err: HexError = ApplicationError::FilesystemError {
            path: PathBuf::from("src"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("src"));
    }

    #[test]
    fn invalid_manifest_is_validation() {
        let err: HexError = DomainError::InvalidManifest {
            reason: "root is not an object".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("composer.json")));
    }
}
