//! Application layer errors.
//!
//! These errors represent failures in adapters and orchestration, not in
//! catalog rules. Catalog errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// The catalog references templates the store does not have.
    #[error("Catalog references {} missing template(s): {}", missing.len(), missing.join(", "))]
    CatalogInconsistent { missing: Vec<String> },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure no file exists where a directory is expected".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::CatalogInconsistent { missing } => vec![
                format!("Missing templates: {}", missing.join(", ")),
                "This build embeds an incomplete template set".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::CatalogInconsistent { .. } => ErrorCategory::NotFound,
        }
    }
}
