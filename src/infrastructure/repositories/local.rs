//! Local Artifact Repository
//!
//! Resolves dependencies against a Maven-layout directory on disk. Nothing is
//! downloaded: an artifact that is not already installed is an error.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::ports::{ArtifactResolver, DependencyResolutionError};
use crate::domain::value_objects::DependencyRef;
use crate::fs::absolute;

/// Default repository location relative to the home directory
pub const DEFAULT_REPOSITORY: &str = ".m2/repository";

/// Resolver over a local Maven-style repository
#[derive(Debug, Clone)]
pub struct LocalRepositoryResolver {
    repository: Option<PathBuf>,
    base_dir: PathBuf,
}

impl LocalRepositoryResolver {
    /// `repository` of `None` means coordinates cannot be resolved; relative
    /// dependency paths are taken relative to `base_dir`.
    pub fn new(repository: Option<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.map(|r| expand_home(&r)),
            base_dir: base_dir.into(),
        }
    }

    /// Use the configured repository, or `~/.m2/repository`
    pub fn with_default(repository: Option<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        let repository =
            repository.or_else(|| dirs::home_dir().map(|home| home.join(DEFAULT_REPOSITORY)));
        Self::new(repository, base_dir)
    }

    fn resolve_path(&self, path: &Path) -> Result<PathBuf, DependencyResolutionError> {
        let path = expand_home(path);
        let joined = if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        };
        if !joined.exists() {
            return Err(DependencyResolutionError::MissingPath { path: joined });
        }
        Ok(absolute(&joined).unwrap_or(joined))
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(&self, dependency: &DependencyRef) -> Result<PathBuf, DependencyResolutionError> {
        match dependency {
            DependencyRef::Path(path) => self.resolve_path(path),
            DependencyRef::Artifact(coordinate) => {
                let repository =
                    self.repository
                        .as_ref()
                        .ok_or_else(|| DependencyResolutionError::NoRepository {
                            coordinate: coordinate.to_string(),
                        })?;
                let path = self
                    .base_dir
                    .join(expand_home(repository))
                    .join(coordinate.repository_path());
                trace!(coordinate = %coordinate, path = %path.display(), "looking up artifact");
                if !path.is_file() {
                    return Err(DependencyResolutionError::NotInRepository {
                        coordinate: coordinate.to_string(),
                        path,
                    });
                }
                Ok(absolute(&path).unwrap_or(path))
            }
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
