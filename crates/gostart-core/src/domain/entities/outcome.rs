//! Per-entry outcomes of a materialization run.
//!
//! Every manifest entry yields exactly one [`EntryOutcome`]. Failures are
//! values, not early returns: the orchestrator records them and moves on.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Step of the per-entry pipeline at which an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureStage {
    ResolvePath,
    Decode,
    CreateDirectory,
    Write,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResolvePath => "resolve-path",
            Self::Decode => "decode",
            Self::CreateDirectory => "create-directory",
            Self::Write => "write",
        };
        f.write_str(s)
    }
}

/// Why a single entry could not be materialized.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryError {
    /// Entry content is not UTF-8; a defect in the template set itself.
    #[error("content of '{entry}' is not valid UTF-8: {reason}")]
    ManifestIntegrity { entry: String, reason: String },

    /// The joined output path would leave the project root.
    #[error("'{entry}' resolves outside the project root: {reason}")]
    PathEscape { entry: String, reason: String },

    #[error("failed to create directory {}: {reason}", path.display())]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl EntryError {
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::PathEscape { .. } => FailureStage::ResolvePath,
            Self::ManifestIntegrity { .. } => FailureStage::Decode,
            Self::DirectoryCreation { .. } => FailureStage::CreateDirectory,
            Self::Write { .. } => FailureStage::Write,
        }
    }
}

/// Result of processing one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum EntryOutcome {
    Succeeded { entry: String, path: PathBuf },
    Failed { entry: String, error: EntryError },
}

impl EntryOutcome {
    /// Relative manifest path this outcome belongs to.
    pub fn entry(&self) -> &str {
        match self {
            Self::Succeeded { entry, .. } | Self::Failed { entry, .. } => entry,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Aggregated outcome of a whole run, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    root: PathBuf,
    outcomes: Vec<EntryOutcome>,
}

impl MaterializeReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    /// Project root every successful path lives under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// Output paths written successfully.
    pub fn succeeded(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            EntryOutcome::Succeeded { path, .. } => Some(path.as_path()),
            EntryOutcome::Failed { .. } => None,
        })
    }

    /// Failed entries, in manifest order.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &EntryError)> {
        self.outcomes.iter().filter_map(|o| match o {
            EntryOutcome::Failed { entry, error } => Some((entry.as_str(), error)),
            EntryOutcome::Succeeded { .. } => None,
        })
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// `true` when every entry was written.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(EntryOutcome::is_success)
    }
}
