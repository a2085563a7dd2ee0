//! Dependency reference value object
//!
//! A dependency is either a concrete file/directory or an abstract artifact
//! coordinate (`group:artifact[:type[:classifier]]:version`) that has to be
//! materialized before it can go on a classpath.

use std::fmt;
use std::path::PathBuf;

/// Maven-style artifact coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group: String,
    pub artifact: String,
    pub kind: String,
    pub classifier: Option<String>,
    pub version: String,
}

impl ArtifactCoordinate {
    /// Parse `group:artifact:version`, `group:artifact:type:version` or
    /// `group:artifact:type:classifier:version`.
    pub fn parse(spec: &str) -> Option<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        let (group, artifact, kind, classifier, version) = match parts.as_slice() {
            [g, a, v] => (*g, *a, "jar", None, *v),
            [g, a, t, v] => (*g, *a, *t, None, *v),
            [g, a, t, c, v] => (*g, *a, *t, Some(*c), *v),
            _ => return None,
        };
        Some(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            kind: kind.to_string(),
            classifier: classifier.map(str::to_string),
            version: version.to_string(),
        })
    }

    /// Repository-relative path, e.g. `org/clojure/clojure/1.2.0/clojure-1.2.0.jar`
    pub fn repository_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        path.push(&self.artifact);
        path.push(&self.version);
        let file = match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact, self.version, classifier, self.kind
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.kind),
        };
        path.push(file);
        path
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.kind)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// One entry of the externally supplied dependency list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyRef {
    /// Already a file or directory on disk
    Path(PathBuf),
    /// Needs resolving to a file
    Artifact(ArtifactCoordinate),
}

impl DependencyRef {
    /// Interpret a command-line or config string.
    ///
    /// Anything that parses as a coordinate and does not look like a path is
    /// treated as an artifact; everything else is a path.
    pub fn parse(spec: &str) -> Self {
        let looks_like_path = spec.contains(['/', '\\']) || spec.ends_with(".jar");
        if !looks_like_path {
            if let Some(coordinate) = ArtifactCoordinate::parse(spec) {
                return DependencyRef::Artifact(coordinate);
            }
        }
        DependencyRef::Path(PathBuf::from(spec))
    }
}

impl From<PathBuf> for DependencyRef {
    fn from(path: PathBuf) -> Self {
        DependencyRef::Path(path)
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyRef::Path(path) => write!(f, "{}", path.display()),
            DependencyRef::Artifact(coordinate) => write!(f, "{}", coordinate),
        }
    }
}
