//! ArtifactResolver port - turns dependency references into files

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::DependencyRef;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependencyResolutionError {
    #[error("dependency not found: {}", path.display())]
    MissingPath { path: PathBuf },

    #[error("cannot resolve artifact {coordinate}: {} does not exist\n  → Fix: install the artifact into the local repository", path.display())]
    NotInRepository { coordinate: String, path: PathBuf },

    #[error("cannot resolve artifact {coordinate}: no local repository configured\n  → Fix: set `toolchain.repository` in cljc.toml or export CLJC_REPOSITORY")]
    NoRepository { coordinate: String },
}

/// Materializes a dependency into an absolute file path
pub trait ArtifactResolver {
    fn resolve(&self, dependency: &DependencyRef) -> Result<PathBuf, DependencyResolutionError>;
}

impl<T: ArtifactResolver + ?Sized> ArtifactResolver for &T {
    fn resolve(&self, dependency: &DependencyRef) -> Result<PathBuf, DependencyResolutionError> {
        (**self).resolve(dependency)
    }
}
