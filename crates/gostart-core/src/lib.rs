//! gostart core - template materialization engine
//!
//! This crate provides the domain and application layers for the
//! `create-go-app` scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        gostart-cli (create-go-app)      │
//! │     prompts, validation, config, logs   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │   build values → materialize entries    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Tokens)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   gostart-adapters (Infrastructure)     │
//! │ (LocalFilesystem, OsTokenGenerator, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateManifest, substitute, rewrite) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gostart_core::application::ScaffoldService;
//!
//! let service = ScaffoldService::new(filesystem, tokens);
//! let report = service.scaffold(&manifest, "demo", "example.com/org", ".")?;
//! for (entry, error) in report.failed() {
//!     eprintln!("{entry}: {error}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PlannedEntry, ScaffoldService,
        ports::{Filesystem, TokenGenerator},
    };
    pub use crate::domain::{
        DatabaseDefaults, EntryError, EntryOutcome, FailureStage, MaterializeReport,
        StubMetadata, SubstitutionValues, TemplateEntry, TemplateManifest,
    };
    pub use crate::error::{GostartError, GostartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
