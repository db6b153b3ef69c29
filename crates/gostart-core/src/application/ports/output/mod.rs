//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gostart-adapters` crate provides implementations.

use crate::error::GostartResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gostart_adapters::filesystem::LocalFilesystem` (production)
/// - `gostart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> GostartResult<()>;

    /// Create or truncate `path` and write `content`. The handle is
    /// released before returning, on success and on failure.
    fn write_file(&self, path: &Path, content: &str) -> GostartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for secure random tokens.
///
/// Implemented by:
/// - `gostart_adapters::random::OsTokenGenerator` (operating-system CSPRNG)
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    /// Return exactly `length` characters from the alphanumeric alphabet.
    ///
    /// Fails with `ApplicationError::RandomSourceUnavailable` when the
    /// secure source cannot be read; never falls back to a weaker source.
    fn generate(&self, length: usize) -> GostartResult<String>;
}
