//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`. Failures
//! of individual manifest entries are not errors at this level at all; they
//! are recorded as [`EntryError`](crate::domain::EntryError) values in the
//! run report.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The secure random source could not produce bytes.
    #[error("Secure random source unavailable: {reason}")]
    RandomSourceUnavailable { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// Template set could not be loaded.
    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RandomSourceUnavailable { .. } => vec![
                "The operating system did not provide random bytes".into(),
                "Database passwords cannot be generated without it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Could not read templates from {}", path.display()),
                "Check --template-dir or templates.local_path".into(),
                "Omit both to use the built-in stub".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RandomSourceUnavailable { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
        }
    }
}
