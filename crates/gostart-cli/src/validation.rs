//! Validation of user-supplied project names and module prefixes.
//!
//! The core accepts any non-blank name and prefix; these stricter rules
//! keep generated module paths and database identifiers well-formed.

use std::{
    path::{Component, Path},
    sync::OnceLock,
};

use regex::Regex;

use crate::error::{CliError, CliResult};

/// Words that may not be used as a project name.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "await", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "debugger", "default", "delete", "do", "double", "else", "enum", "export",
    "extends", "false", "final", "finally", "float", "for", "function", "goto", "if",
    "implements", "import", "in", "instanceof", "int", "interface", "let", "long", "native",
    "new", "null", "package", "private", "protected", "public", "return", "short", "static",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "typeof", "var", "void", "volatile", "while", "with", "yield",
];

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z_]*$").expect("name pattern is valid"))
}

fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(([a-zA-Z0-9]{1,63}\.)+[a-zA-Z]{2,6})(:[0-9]{1,5})?(/[a-zA-Z0-9_./-]*)?(\?[a-zA-Z0-9_=&-]*)?(#[a-zA-Z0-9_-]*)?$",
        )
        .expect("prefix pattern is valid")
    })
}

/// A project argument split into the project name and the directory the
/// project folder is created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget<'a> {
    pub name: &'a str,
    pub parent: &'a Path,
}

/// Split a project argument such as `shop` or `services/shop` into its
/// last path component and the remaining parent path.
pub fn split_project_arg(raw: &str) -> CliResult<ProjectTarget<'_>> {
    let path = Path::new(raw.trim());
    let name = match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_str(),
        _ => None,
    };

    let Some(name) = name else {
        return Err(CliError::InvalidProjectName {
            name: raw.to_owned(),
            reason: "must end with a project name".into(),
        });
    };

    Ok(ProjectTarget {
        name,
        parent: path.parent().unwrap_or(Path::new("")),
    })
}

/// Check a bare project name (no path separators).
pub fn validate_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    if !name_regex().is_match(name) {
        return Err(invalid(
            "must start with a letter and contain only letters and underscores",
        ));
    }
    if RESERVED_WORDS.contains(&name) {
        return Err(invalid("is a reserved word"));
    }
    Ok(())
}

/// Check a module prefix such as `example.com/acme`.
pub fn validate_prefix(prefix: &str) -> CliResult<()> {
    if prefix_regex().is_match(prefix) {
        Ok(())
    } else {
        Err(CliError::InvalidPrefix {
            prefix: prefix.to_owned(),
            reason: "expected a host name with an optional port and path".into(),
        })
    }
}
