//! Namespace value object
//!
//! A dotted module name inferred from a source file's location under its
//! source root. `foo/bar.clj` is namespace `foo.bar`.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{CljcError, CljcResult};

/// Extension of primary-language source files (without the dot)
pub const SOURCE_EXTENSION: &str = "clj";

/// Suffix of the loader class the Clojure compiler emits per namespace
pub const ARTIFACT_SUFFIX: &str = "__init.class";

/// A qualified Clojure namespace, e.g. `foo.bar.baz`.
///
/// Segments are never empty and never contain a dot or a path separator,
/// so the path/namespace transform is reversible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    fn from_segments<S: AsRef<str>>(prefix: &[S], stem: &str) -> Self {
        let mut name = String::new();
        for segment in prefix {
            name.push_str(segment.as_ref());
            name.push('.');
        }
        name.push_str(stem);
        Self(name)
    }

    /// Parse a user-supplied dotted name (e.g. from the `libs` option)
    pub fn parse(name: &str) -> CljcResult<Self> {
        let invalid = |reason: &str| CljcError::InvalidNamespace {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(invalid("contains an empty segment"));
            }
            if segment.contains(['/', '\\']) {
                return Err(invalid("segments must not contain path separators"));
            }
        }
        Ok(Self(name.to_string()))
    }

    /// Infer the namespace of a file given its path relative to a source root.
    ///
    /// Returns `None` for anything that is not a `.clj` file, and for paths
    /// whose directory names or stem contain a dot (`a.b.clj`,
    /// `my.lib/core.clj`): those would name a namespace living elsewhere.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        if !is_source_file(relative) {
            return None;
        }
        let stem = relative.file_stem()?.to_str()?;
        if !is_segment(stem) {
            return None;
        }

        let mut prefix = Vec::new();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                match component {
                    Component::Normal(part) => {
                        let part = part.to_str().filter(|p| is_segment(p))?;
                        prefix.push(part);
                    }
                    Component::CurDir => {}
                    _ => return None,
                }
            }
        }
        Some(Self::from_segments(&prefix, stem))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Path of the namespace's source file relative to its root (`foo/bar.clj`)
    pub fn source_path(&self) -> PathBuf {
        self.relative_with_suffix(&format!(".{}", SOURCE_EXTENSION))
    }

    /// Path of the compiled loader class relative to the output directory
    /// (`foo/bar__init.class`)
    pub fn artifact_path(&self) -> PathBuf {
        self.relative_with_suffix(ARTIFACT_SUFFIX)
    }

    fn relative_with_suffix(&self, suffix: &str) -> PathBuf {
        let mut path = PathBuf::new();
        let mut segments = self.segments().peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{}{}", segment, suffix));
            }
        }
        path
    }
}

/// `path` has the primary-language source extension
pub fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

fn is_segment(part: &str) -> bool {
    !part.is_empty() && !part.contains(['.', '/', '\\'])
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
