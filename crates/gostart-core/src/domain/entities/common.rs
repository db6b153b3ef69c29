use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A forward-slash template path guaranteed to stay inside its root.
///
/// Invariant: never absolute, never empty, no `..` segments. Enforced at
/// construction, so `root.join(path)` can never leave `root`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    ///
    /// Both `/` and `\` are treated as separators; `.` and empty segments
    /// are dropped.
    pub fn try_new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();

        if raw.starts_with('/') || raw.starts_with('\\') || Path::new(raw).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: raw.into() });
        }

        let mut path = PathBuf::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => return Err(DomainError::PathEscape { path: raw.into() }),
                // Windows drive prefixes ("C:") would reset the join base.
                s if s.contains(':') => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: raw.into() });
                }
                s => path.push(s),
            }
        }

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The file extension, if any (`"go"` for `main.go`).
    pub fn extension(&self) -> Option<&str> {
        self.0.extension().and_then(|e| e.to_str())
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
