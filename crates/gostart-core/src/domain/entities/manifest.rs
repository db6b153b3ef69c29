//! Template manifest: the stub project tree the engine materializes.
//!
//! ```text
//! TemplateManifest
//! ├── StubMetadata (module, version, git_rev)
//! └── Vec<TemplateEntry>
//!      └── (relative path, raw bytes)
//! ```
//!
//! A manifest is built once, either from the bundle compiled into the
//! binary or from a template directory, and is read-only afterwards.
//! Entry paths are kept as the raw strings the source provided; they are
//! only checked against the project root when the orchestrator resolves
//! them, so a malformed entry fails on its own without poisoning the rest
//! of the manifest.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Fixed identity of the stub the templates were cut from.
///
/// `module` is the literal module path baked into the stub sources; it is
/// rewritten to the concrete `prefix/projectName` in module-definition files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubMetadata {
    pub module: String,
    pub version: String,
    pub git_rev: String,
}

impl StubMetadata {
    pub fn new(
        module: impl Into<String>,
        version: impl Into<String>,
        git_rev: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
            git_rev: git_rev.into(),
        }
    }
}

/// One file record of the stub: forward-slash relative path plus raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    path: String,
    content: Cow<'static, [u8]>,
}

impl TemplateEntry {
    /// Entry borrowing compiled-in bytes.
    pub fn from_static(path: impl Into<String>, content: &'static [u8]) -> Self {
        Self {
            path: path.into(),
            content: Cow::Borrowed(content),
        }
    }

    /// Entry owning bytes read at runtime.
    pub fn owned(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: Cow::Owned(content.into()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Ordered, immutable collection of template entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateManifest {
    stub: StubMetadata,
    entries: Vec<TemplateEntry>,
}

impl TemplateManifest {
    /// Build a manifest, preserving the given entry order.
    pub fn new(stub: StubMetadata, entries: Vec<TemplateEntry>) -> Self {
        Self { stub, entries }
    }

    /// Build a manifest with entries sorted by path.
    ///
    /// Used by loaders whose discovery order depends on the platform.
    pub fn sorted(stub: StubMetadata, mut entries: Vec<TemplateEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self { stub, entries }
    }

    pub fn stub(&self) -> &StubMetadata {
        &self.stub
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its exact relative path.
    pub fn get(&self, path: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Structural checks: non-empty, stub module set, no duplicate paths.
    ///
    /// Path safety is deliberately not checked here; see module docs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.stub.module.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "stub.module",
            });
        }

        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }

        Ok(())
    }
}
