//! Built-in template discovery.
//!
//! The Go application stub ships inside the binary: every file under the
//! crate's `stub/` directory is embedded at compile time and exposed as a
//! [`TemplateManifest`] by [`builtin_manifest`].
//!
//! # Template resolution order
//!
//! [`load_manifest`] is the single entry point used by the CLI:
//!
//! 1. **Local template directory** when one is given (`--template-dir` or
//!    `templates.local_path` in the configuration). Loaded with
//!    [`DirectoryManifestLoader`]; the embedded stub metadata is used unless
//!    the directory carries its own `stub.toml`.
//! 2. **Embedded stub** otherwise.
//!
//! Stub version and git revision can be stamped at build time through the
//! `GOSTART_STUB_VERSION` and `GOSTART_STUB_GIT_REV` environment variables.

use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};
use tracing::{debug, info, instrument};

use gostart_core::{
    domain::{StubMetadata, TemplateEntry, TemplateManifest},
    error::{GostartError, GostartResult},
};

use crate::template_loader::DirectoryManifestLoader;

static STUB_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/stub");

/// Module path baked into the stub sources.
pub const STUB_MODULE: &str = "gostartkit.com/go/app";

/// Version of the embedded stub.
pub const STUB_VERSION: &str = match option_env!("GOSTART_STUB_VERSION") {
    Some(version) => version,
    None => "v0.1.0",
};

/// Git revision the embedded stub was cut from.
pub const STUB_GIT_REV: &str = match option_env!("GOSTART_STUB_GIT_REV") {
    Some(rev) => rev,
    None => "unknown",
};

/// Metadata of the embedded stub.
pub fn stub_metadata() -> StubMetadata {
    StubMetadata::new(STUB_MODULE, STUB_VERSION, STUB_GIT_REV)
}

/// The embedded manifest, entries sorted by relative path.
pub fn builtin_manifest() -> TemplateManifest {
    let mut entries = Vec::new();
    collect_entries(&STUB_DIR, &mut entries);
    TemplateManifest::sorted(stub_metadata(), entries)
}

fn collect_entries(dir: &'static Dir<'static>, out: &mut Vec<TemplateEntry>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_entries(sub, out),
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                out.push(TemplateEntry::from_static(path, file.contents()));
            }
        }
    }
}

/// Load the manifest to materialize, following the module-level resolution
/// order.
///
/// # Errors
///
/// A local template directory fails with `TemplateLoad` when unreadable and
/// with a domain error when its manifest is invalid. An invalid embedded stub
/// is a packaging bug and surfaces as `Internal`.
#[instrument(skip_all, fields(local = ?local_dir))]
pub fn load_manifest(local_dir: Option<&Path>) -> GostartResult<TemplateManifest> {
    match local_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using local template directory");
            DirectoryManifestLoader::new(dir, stub_metadata()).load()
        }
        None => {
            let manifest = builtin_manifest();
            manifest.validate().map_err(|e| GostartError::Internal {
                message: format!("embedded stub is invalid: {e}"),
            })?;
            debug!(entries = manifest.len(), "Using embedded stub");
            Ok(manifest)
        }
    }
}
