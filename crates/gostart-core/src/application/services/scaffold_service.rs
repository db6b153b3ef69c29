//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Build the substitution values (generating database secrets)
//! 2. For each manifest entry, in order:
//!    resolve path → decode → rewrite module path → substitute → mkdir → write
//! 3. Report the outcome of every entry
//!
//! Per-entry failures never abort the run. The only run-level failure after
//! argument checks is an unavailable random source, which is raised before
//! any file is touched.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TokenGenerator},
    domain::{
        DatabaseDefaults, DatabaseSecrets, DomainError, EntryError, EntryOutcome,
        MaterializeReport, RelativePath, SECRET_LENGTH, SubstitutionValues, TemplateEntry,
        TemplateManifest, is_module_definition, module_name, rewrite_module_path, substitute,
    },
    error::GostartResult,
};

/// One line of the output plan: where an entry would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub entry: String,
    pub target: Result<PathBuf, EntryError>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    tokens: Box<dyn TokenGenerator>,
    database: DatabaseDefaults,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use gostart_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     tokens,     // impl TokenGenerator
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, tokens: Box<dyn TokenGenerator>) -> Self {
        Self {
            filesystem,
            tokens,
            database: DatabaseDefaults::default(),
        }
    }

    /// Override the database driver/host/charset/collation values.
    pub fn with_database_defaults(mut self, database: DatabaseDefaults) -> Self {
        self.database = database;
        self
    }

    /// Scaffold a new project under `base_dir/project_name`.
    ///
    /// Returns `Err` only for run-level preconditions (missing name or
    /// prefix, random source unavailable). Everything else is in the report.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            prefix = %prefix,
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        manifest: &TemplateManifest,
        project_name: &str,
        prefix: &str,
        base_dir: impl AsRef<Path>,
    ) -> GostartResult<MaterializeReport> {
        let module = self.module_for(project_name, prefix)?;
        let values = self.build_values(manifest, project_name, &module)?;
        let root = base_dir.as_ref().join(project_name);

        if self.filesystem.exists(&root) {
            info!(root = %root.display(), "Project directory exists, files will be overwritten");
        }

        let report = self.materialize(manifest, &values, &module, &root);

        if report.is_complete() {
            info!(files = report.success_count(), "Scaffold completed successfully");
        } else {
            warn!(
                written = report.success_count(),
                failed = report.failure_count(),
                "Scaffold completed with failures"
            );
        }

        Ok(report)
    }

    /// Build the placeholder values for one run.
    ///
    /// Generates the two database passwords independently; fails if the
    /// random source is unavailable.
    pub fn build_values(
        &self,
        manifest: &TemplateManifest,
        project_name: &str,
        module: &str,
    ) -> GostartResult<SubstitutionValues> {
        let secrets = DatabaseSecrets {
            root_password: self.tokens.generate(SECRET_LENGTH)?,
            password: self.tokens.generate(SECRET_LENGTH)?,
        };

        Ok(SubstitutionValues::for_project(
            project_name,
            module,
            &self.database,
            &secrets,
            manifest.stub(),
        ))
    }

    /// Write every manifest entry under `root`, recording each outcome.
    #[instrument(skip_all, fields(root = %root.display(), entries = manifest.len()))]
    pub fn materialize(
        &self,
        manifest: &TemplateManifest,
        values: &SubstitutionValues,
        module: &str,
        root: &Path,
    ) -> MaterializeReport {
        let mut report = MaterializeReport::new(root);
        let stub_module = manifest.stub().module.as_str();

        for entry in manifest.entries() {
            let outcome = match self.materialize_entry(entry, values, stub_module, module, root) {
                Ok(path) => {
                    debug!(entry = entry.path(), path = %path.display(), "Wrote file");
                    EntryOutcome::Succeeded {
                        entry: entry.path().to_owned(),
                        path,
                    }
                }
                Err(error) => {
                    warn!(entry = entry.path(), stage = %error.stage(), %error, "Entry failed");
                    EntryOutcome::Failed {
                        entry: entry.path().to_owned(),
                        error,
                    }
                }
            };
            report.record(outcome);
        }

        report
    }

    /// Compute the output path of every entry without touching the filesystem.
    pub fn plan(
        manifest: &TemplateManifest,
        project_name: &str,
        base_dir: impl AsRef<Path>,
    ) -> Vec<PlannedEntry> {
        let root = base_dir.as_ref().join(project_name);
        manifest
            .entries()
            .iter()
            .map(|entry| PlannedEntry {
                entry: entry.path().to_owned(),
                target: resolve_output_path(&root, entry).map(|(_, path)| path),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn module_for(&self, project_name: &str, prefix: &str) -> GostartResult<String> {
        if project_name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project_name",
            }
            .into());
        }
        if prefix.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "prefix" }.into());
        }
        Ok(module_name(prefix, project_name))
    }

    fn materialize_entry(
        &self,
        entry: &TemplateEntry,
        values: &SubstitutionValues,
        stub_module: &str,
        module: &str,
        root: &Path,
    ) -> Result<PathBuf, EntryError> {
        // 1. Path
        let (relative, path) = resolve_output_path(root, entry)?;

        // 2. Decode
        let text =
            std::str::from_utf8(entry.content()).map_err(|e| EntryError::ManifestIntegrity {
                entry: entry.path().to_owned(),
                reason: e.to_string(),
            })?;

        // 3. Module path (module-definition files only)
        let text = if is_module_definition(&relative) {
            rewrite_module_path(text, stub_module, module)
        } else {
            text.to_owned()
        };

        // 4. Placeholders
        let text = substitute(&text, values);

        // 5. Parent directory
        if let Some(parent) = path.parent() {
            self.filesystem
                .create_dir_all(parent)
                .map_err(|e| EntryError::DirectoryCreation {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }

        // 6. Write
        self.filesystem
            .write_file(&path, &text)
            .map_err(|e| EntryError::Write {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(path)
    }
}

fn resolve_output_path(
    root: &Path,
    entry: &TemplateEntry,
) -> Result<(RelativePath, PathBuf), EntryError> {
    let relative = RelativePath::try_new(entry.path()).map_err(|e| EntryError::PathEscape {
        entry: entry.path().to_owned(),
        reason: e.to_string(),
    })?;
    let path = root.join(relative.as_path());
    Ok((relative, path))
}

// ── tests ─────────────────────────────────────────────────────────────────────
