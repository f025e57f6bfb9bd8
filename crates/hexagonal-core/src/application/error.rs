//! Application layer errors.
//!
//! These errors represent failures talking to the outside world. Inputs the
//! installer cannot make sense of are `DomainError`s from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while the installer drives its ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The stub store could not be read.
    #[error("Stub store error: {reason}")]
    StubStoreError { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state is unavailable (lock poisoned)")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions in the project".into(),
                "Steps completed before the failure were kept; fix the cause and re-run".into(),
            ],
            Self::StubStoreError { .. } => vec![
                "Check the stubs.path setting in your configuration".into(),
                "Remove it to fall back to the bundled stubs".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::StubStoreError { .. } => ErrorCategory::Configuration,
        }
    }
}
