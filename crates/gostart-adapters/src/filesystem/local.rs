//! Local filesystem adapter using std::fs.

use std::{fs::File, io, io::Write, path::Path};

use gostart_core::{application::ports::Filesystem, error::GostartResult};

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
    fn create_dir_all(&self, path: &Path) -> GostartResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GostartResult<()> {
        // The handle is dropped when this scope ends, whichever way it ends.
        let mut file = File::create(path).map_err(|e| map_io_error(path, e, "open file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        file.flush().map_err(|e| map_io_error(path, e, "flush file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> gostart_core::error::GostartError {
    use gostart_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("go.mod");
        std::fs::write(&path, "module old/and/much/longer/than/the/replacement\n").unwrap();

        LocalFilesystem::new().write_file(&path, "module x\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "module x\n");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/file.txt");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("missing"), "unexpected error: {message}");
    }
}
