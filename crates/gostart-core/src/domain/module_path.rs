//! Module-path rewriting for Go module-definition files.
//!
//! The stub's sources import each other through a fixed module path
//! (`gostartkit.com/go/app/...`). That path is structure, not a declared
//! placeholder, so it is swapped for `prefix/projectName` as a literal
//! string in `.go` and `.mod` files only.

use crate::domain::entities::common::RelativePath;

/// Extensions whose files embed the fully-qualified module path.
pub const MODULE_DEFINITION_EXTENSIONS: [&str; 2] = ["go", "mod"];

/// `true` for `.go` sources and the `go.mod` manifest.
pub fn is_module_definition(path: &RelativePath) -> bool {
    path.extension()
        .is_some_and(|ext| MODULE_DEFINITION_EXTENSIONS.contains(&ext))
}

/// Form the concrete module identifier `prefix/projectName`.
///
/// Trailing slashes on the prefix are dropped, so `example.com/org/`
/// gives `example.com/org/demo` rather than a path with an empty segment.
pub fn module_name(prefix: &str, project_name: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), project_name)
}

/// Replace every non-overlapping occurrence of `stub` with `concrete`.
///
/// `stub` is matched literally; characters such as `.` carry no pattern
/// meaning. An empty stub leaves the text unchanged.
pub fn rewrite_module_path(text: &str, stub: &str, concrete: &str) -> String {
    if stub.is_empty() {
        return text.to_owned();
    }
    text.replace(stub, concrete)
}
