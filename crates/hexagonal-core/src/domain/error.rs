// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Domain errors describe inputs the installer cannot work with, as opposed
/// to the I/O failures reported by the application layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("composer.json is not a valid manifest: {reason}")]
    InvalidManifest { reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidManifest { reason } => vec![
                format!("Manifest problem: {}", reason),
                "Validate composer.json with: composer validate".into(),
                "Steps before the manifest patch were already applied".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidManifest { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}
