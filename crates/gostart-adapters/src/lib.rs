//! Infrastructure adapters for gostart.
//!
//! This crate implements the ports defined in `gostart-core::application::ports`
//! and owns every source of templates. It contains all external dependencies
//! and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod random;
pub mod template_loader;

// Re-export commonly used adapters
pub use builtin_templates::{builtin_manifest, load_manifest};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use random::OsTokenGenerator;
pub use template_loader::DirectoryManifestLoader;
