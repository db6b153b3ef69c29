//! Placeholder interpolation.
//!
//! Template content refers to values as `{{ .Name }}`: double braces,
//! optional whitespace, a leading dot, then `[A-Za-z0-9_]+`. Known names
//! are replaced verbatim in a single left-to-right scan; replaced text is
//! never re-scanned. Unknown names are left exactly as written.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::domain::entities::manifest::StubMetadata;

/// Keys placed into every [`SubstitutionValues`] built for a project.
pub mod keys {
    pub const KEY: &str = "Key";
    pub const MODULE_NAME: &str = "ModuleName";
    pub const DATABASE_DRIVER: &str = "DatabaseDriver";
    pub const DATABASE_HOST: &str = "DatabaseHost";
    pub const DATABASE_NAME: &str = "DatabaseName";
    pub const DATABASE_USER: &str = "DatabaseUser";
    pub const DATABASE_ROOT_PASSWORD: &str = "DatabaseRootPassword";
    pub const DATABASE_PASSWORD: &str = "DatabasePassword";
    pub const DATABASE_CHARSET: &str = "DatabaseCharset";
    pub const DATABASE_COLLATION: &str = "DatabaseCollation";
    pub const STUB_VERSION: &str = "StubVersion";
    pub const STUB_GIT_REV: &str = "StubGitRev";
}

/// Length of each generated database password.
pub const SECRET_LENGTH: usize = 32;

/// Database settings that are not derived from the project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseDefaults {
    pub driver: String,
    pub host: String,
    pub charset: String,
    pub collation: String,
}

impl Default for DatabaseDefaults {
    fn default() -> Self {
        Self {
            driver: "mysql".into(),
            host: "127.0.0.1".into(),
            charset: "utf8".into(),
            collation: "utf8_general_ci".into(),
        }
    }
}

/// Freshly generated credentials; one per password placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSecrets {
    pub root_password: String,
    pub password: String,
}

impl std::fmt::Debug for DatabaseSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSecrets")
            .field("root_password", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Placeholder name → replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionValues {
    values: BTreeMap<String, String>,
}

impl SubstitutionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full value set for one scaffolding run.
    pub fn for_project(
        project_name: &str,
        module_name: &str,
        database: &DatabaseDefaults,
        secrets: &DatabaseSecrets,
        stub: &StubMetadata,
    ) -> Self {
        Self::new()
            .with(keys::KEY, project_name)
            .with(keys::MODULE_NAME, module_name)
            .with(keys::DATABASE_DRIVER, &database.driver)
            .with(keys::DATABASE_HOST, &database.host)
            .with(keys::DATABASE_NAME, project_name)
            .with(keys::DATABASE_USER, project_name)
            .with(keys::DATABASE_ROOT_PASSWORD, &secrets.root_password)
            .with(keys::DATABASE_PASSWORD, &secrets.password)
            .with(keys::DATABASE_CHARSET, &database.charset)
            .with(keys::DATABASE_COLLATION, &database.collation)
            .with(keys::STUB_VERSION, &stub.version)
            .with(keys::STUB_GIT_REV, &stub.git_rev)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Replace every recognized `{{ .Name }}` in `text`.
pub fn substitute(text: &str, values: &SubstitutionValues) -> String {
    placeholder_regex()
        .replace_all(text, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.to_owned(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*\.([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}
