pub mod common;
pub mod manifest;
pub mod outcome;

pub use crate::domain::DomainError;
pub use manifest::{TemplateEntry, TemplateManifest};
pub use outcome::{EntryOutcome, MaterializeReport};
