// ============================================================================
// domain/error.rs - CATALOG ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside generation reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Catalog has no entries")]
    EmptyCatalog,

    #[error("Invalid template id: {0}")]
    InvalidTemplateId(String),

    #[error("Invalid output path pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Duplicate output path in catalog: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template missing: {template_id}")]
    TemplateMissing { template_id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { template_id } => vec![
                format!("No embedded template named '{}'", template_id),
                "The built-in catalog and the embedded templates are out of sync".into(),
                "Try: stencil --list-templates".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("Pattern: {}", pattern),
                "Patterns start with '/', stay inside the project root".into(),
                "and use the {projectName} segment at most once".into(),
            ],
            Self::DuplicatePath { path } => {
                vec![format!("Two catalog entries write to '{}'", path)]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCatalog
            | Self::InvalidTemplateId(_)
            | Self::InvalidPattern { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Validation,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
