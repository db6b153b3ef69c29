//! Core domain layer for gostart.
//!
//! This module contains the pure part of the materialization engine: the
//! template manifest, placeholder substitution, module-path rewriting, the
//! token alphabet and the per-entry outcome model. All I/O (filesystem,
//! randomness) is reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std, thiserror, regex, serde derives
//! - **Immutable entities**: manifests are read-only once built
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod module_path;
pub mod substitution;
pub mod token;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{StubMetadata, TemplateEntry, TemplateManifest},
    outcome::{EntryError, EntryOutcome, FailureStage, MaterializeReport},
};

pub use error::{DomainError, ErrorCategory};

pub use module_path::{is_module_definition, module_name, rewrite_module_path};
pub use substitution::{
    DatabaseDefaults, DatabaseSecrets, SECRET_LENGTH, SubstitutionValues, substitute,
};
pub use token::{ALPHABET, is_alphanumeric_token, token_from_bytes};
