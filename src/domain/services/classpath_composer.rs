//! Classpath Composer
//!
//! Precedence is fixed: dependencies, then every source root (Clojure
//! sources load without being compiled first), then the runtime archive.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::ports::ArtifactResolver;
use crate::domain::value_objects::{Classpath, DependencyRef};
use crate::error::CljcResult;
use crate::fs::absolute;

/// Compose the classpath for one build. Nothing is cached between calls.
pub fn compose<R: ArtifactResolver>(
    dependencies: &[DependencyRef],
    source_roots: &[PathBuf],
    runtime_lib: &Path,
    resolver: &R,
) -> CljcResult<Classpath> {
    let mut classpath = Classpath::new();

    for dependency in dependencies {
        let path = resolver.resolve(dependency)?;
        trace!(dependency = %dependency, path = %path.display(), "resolved dependency");
        classpath.push(path);
    }

    for root in source_roots {
        classpath.push(absolute(root)?);
    }

    // runtime archive is always last, even when also listed as a dependency
    let runtime_lib = absolute(runtime_lib)?;
    if classpath.contains(&runtime_lib) {
        classpath = classpath
            .entries()
            .iter()
            .filter(|e| **e != runtime_lib)
            .cloned()
            .collect();
    }
    classpath.push(runtime_lib);

    debug!(entries = classpath.len(), "composed classpath");
    Ok(classpath)
}
