//! Filesystem-based manifest loader.
//!
//! Turns a directory tree into a [`TemplateManifest`] so a project can be
//! generated from a locally edited stub instead of the embedded one.
//!
//! # Directory layout expected
//!
//! ```text
//! my-stub/
//! ├── stub.toml        ← optional metadata, not part of the manifest
//! ├── go.mod
//! ├── main.go
//! └── config/
//!     └── app.json
//! ```
//!
//! # `stub.toml` format
//!
//! ```toml
//! module  = "gostartkit.com/go/app"   # module path used inside the stub
//! version = "v0.2.0"
//! git_rev = "9f1c2e4"
//! ```
//!
//! Every key is optional; missing keys fall back to the metadata passed to
//! [`DirectoryManifestLoader::new`].
//!
//! File contents are read as raw bytes. Entries that are not valid UTF-8 are
//! still loaded and fail individually at materialization time.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

use gostart_core::{
    application::ApplicationError,
    domain::{StubMetadata, TemplateEntry, TemplateManifest},
    error::GostartResult,
};

/// Name of the optional metadata file at the template root.
pub const STUB_FILE_NAME: &str = "stub.toml";

/// Directories never copied into a generated project.
const IGNORED_DIRS: &[&str] = &[".git"];

/// Deserialised representation of a `stub.toml` file.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StubFile {
    pub module: Option<String>,
    pub version: Option<String>,
    pub git_rev: Option<String>,
}

impl StubFile {
    /// Overlay the keys present in this file on top of `fallback`.
    pub fn merge_into(self, fallback: StubMetadata) -> StubMetadata {
        StubMetadata {
            module: self.module.unwrap_or(fallback.module),
            version: self.version.unwrap_or(fallback.version),
            git_rev: self.git_rev.unwrap_or(fallback.git_rev),
        }
    }
}

/// Loads a [`TemplateManifest`] from a directory tree.
///
/// # Example
///
/// ```no_run
/// use gostart_adapters::{builtin_templates::stub_metadata, DirectoryManifestLoader};
///
/// let manifest = DirectoryManifestLoader::new("./my-stub", stub_metadata()).load()?;
/// println!("Loaded {} entries", manifest.len());
/// # Ok::<(), gostart_core::error::GostartError>(())
/// ```
pub struct DirectoryManifestLoader {
    root: PathBuf,
    fallback: StubMetadata,
}

impl DirectoryManifestLoader {
    /// Create a loader pointed at `root`.
    ///
    /// The directory does not need to exist yet; [`load`](Self::load)
    /// returns an error if it is missing when called.
    pub fn new(root: impl Into<PathBuf>, fallback: StubMetadata) -> Self {
        Self {
            root: root.into(),
            fallback,
        }
    }

    /// Walk the directory and build a validated, path-sorted manifest.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::TemplateLoad`] if the root is missing, a file
    ///   cannot be read, or `stub.toml` is malformed.
    /// - A domain error if the resulting manifest is empty.
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    pub fn load(&self) -> GostartResult<TemplateManifest> {
        if !self.root.is_dir() {
            return Err(self.load_error(&self.root, "template directory not found"));
        }

        let stub = self.load_stub()?;
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_ignored_dir(e.file_name(), e.file_type().is_dir()));

        for walk_entry in walker {
            let walk_entry = walk_entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                self.load_error(&path, &format!("directory walk error: {e}"))
            })?;

            // Symlinks and other special types are skipped along with dirs.
            if !walk_entry.file_type().is_file() {
                continue;
            }

            let abs_path = walk_entry.path();
            let rel = abs_path
                .strip_prefix(&self.root)
                .map_err(|_| self.load_error(abs_path, "path is outside the template root"))?;

            if rel == Path::new(STUB_FILE_NAME) {
                continue;
            }

            let content = fs::read(abs_path)
                .map_err(|e| self.load_error(abs_path, &format!("failed to read file: {e}")))?;

            let path_str = normalize_path(&rel.to_string_lossy());
            trace!(entry = %path_str, bytes = content.len(), "loaded entry");
            entries.push(TemplateEntry::owned(path_str, content));
        }

        let manifest = TemplateManifest::sorted(stub, entries);
        manifest.validate()?;

        debug!(count = manifest.len(), "finished loading template directory");
        Ok(manifest)
    }

    fn load_stub(&self) -> GostartResult<StubMetadata> {
        let path = self.root.join(STUB_FILE_NAME);
        if !path.is_file() {
            return Ok(self.fallback.clone());
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| self.load_error(&path, &format!("failed to read: {e}")))?;
        let file: StubFile = toml::from_str(&raw)
            .map_err(|e| self.load_error(&path, &format!("failed to parse: {e}")))?;

        debug!(path = %path.display(), "applied stub metadata overrides");
        Ok(file.merge_into(self.fallback.clone()))
    }

    fn load_error(&self, path: &Path, reason: &str) -> gostart_core::error::GostartError {
        ApplicationError::TemplateLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
        .into()
    }
}

fn is_ignored_dir(name: &OsStr, is_dir: bool) -> bool {
    is_dir && IGNORED_DIRS.iter().any(|ignored| name == *ignored)
}

/// Normalise a filesystem path to forward slashes so manifests built on
/// Windows and Unix are identical.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gostart_core::{domain::DomainError, error::GostartError};
    use tempfile::TempDir;

    fn fallback() -> StubMetadata {
        StubMetadata::new("gostartkit.com/go/app", "v0.1.0", "unknown")
    }

    /// Write a template directory under a TempDir.
    fn make_template_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel_path, content) in files {
            let full = temp.path().join(rel_path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn missing_dir_is_template_load_error() {
        let loader = DirectoryManifestLoader::new("/absolutely/does/not/exist", fallback());
        assert!(matches!(
            loader.load(),
            Err(GostartError::Application(ApplicationError::TemplateLoad { .. }))
        ));
    }

    #[test]
    fn empty_dir_is_rejected() {
        let temp = TempDir::new().unwrap();
        let loader = DirectoryManifestLoader::new(temp.path(), fallback());
        assert!(matches!(
            loader.load(),
            Err(GostartError::Domain(DomainError::EmptyManifest))
        ));
    }

    #[test]
    fn nested_files_are_sorted_with_forward_slashes() {
        let temp = make_template_dir(&[
            ("main.go", "package main"),
            ("route/route.go", "package route"),
            ("config/app.json", "{}"),
        ]);

        let manifest = DirectoryManifestLoader::new(temp.path(), fallback())
            .load()
            .unwrap();

        let paths: Vec<&str> = manifest.entries().iter().map(|e| e.path()).collect();
        assert_eq!(paths, ["config/app.json", "main.go", "route/route.go"]);
    }

    #[test]
    fn stub_toml_overrides_metadata_and_is_not_an_entry() {
        let temp = make_template_dir(&[
            ("go.mod", "module example.org/stub\n"),
            (STUB_FILE_NAME, "module = \"example.org/stub\"\ngit_rev = \"abc1234\"\n"),
        ]);

        let manifest = DirectoryManifestLoader::new(temp.path(), fallback())
            .load()
            .unwrap();

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.stub().module, "example.org/stub");
        assert_eq!(manifest.stub().version, "v0.1.0");
        assert_eq!(manifest.stub().git_rev, "abc1234");
    }

    #[test]
    fn malformed_stub_toml_is_an_error() {
        let temp = make_template_dir(&[
            ("go.mod", "module x\n"),
            (STUB_FILE_NAME, "module = [not toml"),
        ]);

        let err = DirectoryManifestLoader::new(temp.path(), fallback())
            .load()
            .unwrap_err();
        assert!(err.to_string().contains(STUB_FILE_NAME));
    }

    #[test]
    fn unknown_stub_key_is_an_error() {
        let temp = make_template_dir(&[
            ("go.mod", "module x\n"),
            (STUB_FILE_NAME, "modul = \"typo\"\n"),
        ]);

        assert!(
            DirectoryManifestLoader::new(temp.path(), fallback())
                .load()
                .is_err()
        );
    }

    #[test]
    fn git_directory_is_skipped() {
        let temp = make_template_dir(&[
            ("main.go", "package main"),
            (".git/HEAD", "ref: refs/heads/main"),
        ]);

        let manifest = DirectoryManifestLoader::new(temp.path(), fallback())
            .load()
            .unwrap();
        assert!(manifest.get(".git/HEAD").is_none());
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn non_utf8_content_is_kept_raw() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("logo.bin"), b"\xff\xfe\x00").unwrap();

        let manifest = DirectoryManifestLoader::new(temp.path(), fallback())
            .load()
            .unwrap();
        assert_eq!(manifest.get("logo.bin").unwrap().content(), b"\xff\xfe\x00");
    }

    #[test]
    fn normalize_path_replaces_backslashes() {
        assert_eq!(normalize_path(r"config\app.json"), "config/app.json");
    }
}
