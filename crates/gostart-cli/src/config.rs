//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the values it needs
//! (`DatabaseDefaults`).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOSTART_` prefix, `__` between nested keys,
//!    e.g. `GOSTART_DEFAULTS__PREFIX=example.com/acme`
//! 3. Config file: `--config FILE`, or the per-user `config.toml`
//! 4. Built-in defaults (always present)
//!
//! # File format
//!
//! ```toml
//! [defaults]
//! prefix = "example.com/acme"
//!
//! [database]
//! driver    = "mysql"
//! host      = "127.0.0.1"
//! charset   = "utf8mb4"
//! collation = "utf8mb4_general_ci"
//!
//! [output]
//! no_color = false
//!
//! [templates]
//! local_path = "/path/to/my-stub"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gostart_core::domain::DatabaseDefaults;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "GOSTART";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Database settings written into the generated project.
    pub database: DatabaseDefaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Prefix used instead of prompting when none is given.
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Stub directory used instead of the embedded stub.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicitly given `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, ENV_PREFIX)
    }

    fn load_from(path: &Path, required: bool, env_prefix: &str) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-go-app.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gostartkit", "create-go-app")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-go-app.toml"))
    }
}
