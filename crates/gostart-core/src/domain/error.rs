// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are copied into per-entry outcomes)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Path '{path}' escapes the project root")]
    PathEscape { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Template entry has an empty path")]
    EmptyPath,

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Template manifest has no entries")]
    EmptyManifest,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathEscape { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Template path '{}' must stay inside the project", path),
                "Remove '..' segments and leading '/' from template paths".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' appears more than once in the template set", path),
                "Each template file must map to exactly one output file".into(),
            ],
            Self::EmptyManifest => vec![
                "The template set contains no files".into(),
                "Check --template-dir or templates.local_path".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathEscape { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyPath
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Integrity,
            Self::EmptyManifest => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Integrity,
    NotFound,
}
