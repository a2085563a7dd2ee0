//! Compile Use Case
//!
//! Orchestrates one build: duplicate guard, classpath, batched Clojure
//! compile, resource mirror, secondary delegation. Any step failing stops
//! the run; there is no rollback of what earlier steps wrote.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{Toolchain, ToolchainConfig};
use crate::domain::ports::{
    ArtifactResolver, CommandRunner, DelegatedCompileUnit, SecondaryCompilerFactory,
};
use crate::domain::services::secondary_detector::plan;
use crate::domain::services::{
    compose, detect_all, detect_namespaces, invoke, locate_unique, mirror, stale_namespaces,
    LocatedNamespace,
};
use crate::domain::value_objects::{Classpath, DependencyRef, Namespace};
use crate::error::CljcResult;
use crate::fs::{absolute, list_files};

use super::options::CompileOptions;
use super::result::CompileReport;

/// Compile use case - builds a mixed Clojure/JVM source tree into a class
/// directory
pub struct CompileUseCase<R, A, F>
where
    R: CommandRunner,
    A: ArtifactResolver,
    F: SecondaryCompilerFactory,
{
    toolchain: Toolchain,
    runner: R,
    resolver: A,
    compilers: F,
}

impl<R, A, F> CompileUseCase<R, A, F>
where
    R: CommandRunner,
    A: ArtifactResolver,
    F: SecondaryCompilerFactory,
{
    /// Create a new compile use case. Fails when the toolchain is not
    /// configured, before anything touches the file system.
    pub fn new(toolchain: &ToolchainConfig, runner: R, resolver: A, compilers: F) -> CljcResult<Self> {
        Ok(Self {
            toolchain: toolchain.validate()?,
            runner,
            resolver,
            compilers,
        })
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Run the whole pipeline.
    ///
    /// `sources` may mix directories (source roots) and single files; only
    /// directories are searched for namespaces and mirrored, but both take
    /// part in secondary language detection.
    pub fn compile(
        &self,
        sources: &[PathBuf],
        target: &Path,
        dependencies: &[DependencyRef],
        options: &CompileOptions,
    ) -> CljcResult<CompileReport> {
        let target = absolute(target)?;
        let (roots, files) = split_sources(sources)?;
        info!(target = %target.display(), roots = roots.len(), "compiling");

        let namespaces = match options.parsed_libs()? {
            Some(libs) => {
                debug!(count = libs.len(), "using configured libs");
                libs
            }
            None => detect_all(&roots)?,
        };

        let located = locate_unique(&namespaces, &roots)?;
        let classpath = compose(dependencies, &roots, &self.toolchain.runtime_jar, &self.resolver)?;
        debug!(classpath = %classpath.to_os_string().to_string_lossy(), "classpath");

        let mut report = CompileReport::new(target.clone());

        if needs_compile(&namespaces, &located, &target)? {
            invoke(&self.runner, &self.toolchain.java, &namespaces, &classpath, &target)?;
            report.compiled = !namespaces.is_empty();
        } else {
            info!("clojure namespaces up to date");
        }

        fs::create_dir_all(&target)?;
        let excluded: HashSet<Namespace> = namespaces.iter().cloned().collect();
        for root in &roots {
            report.add_mirror(mirror(root, &target, &excluded)?);
        }

        let mut all_sources = roots.clone();
        all_sources.extend(files);
        let source_files = list_files(&all_sources)?;

        // later compilers may reference classes emitted by earlier ones
        let mut delegated_classpath = classpath.clone();
        for (language, files) in plan(&source_files, options.secondary_policy) {
            let unit = DelegatedCompileUnit {
                language,
                files,
                classpath: delegated_classpath.clone(),
                target: target.clone(),
            };
            info!(language = %language, files = unit.files.len(), "delegating");
            self.compilers.create(language).compile(&unit)?;
            report.secondary.push(language);
            delegated_classpath = classpath.with_entry(&target);
        }

        report.namespaces = namespaces;
        report.classpath = classpath;
        Ok(report)
    }

    /// The classpath a compile of `sources` would use
    pub fn classpath(&self, sources: &[PathBuf], dependencies: &[DependencyRef]) -> CljcResult<Classpath> {
        let (roots, _) = split_sources(sources)?;
        compose(dependencies, &roots, &self.toolchain.runtime_jar, &self.resolver)
    }
}

/// Namespaces per source root, for listing. Needs no toolchain.
pub fn list_namespaces(sources: &[PathBuf]) -> CljcResult<Vec<(PathBuf, Vec<Namespace>)>> {
    let (roots, _) = split_sources(sources)?;
    roots
        .into_iter()
        .map(|root| {
            let namespaces = detect_namespaces(&root)?;
            Ok((root, namespaces))
        })
        .collect()
}

/// Absolute source roots and plain files. Entries that do not exist are
/// skipped with a warning.
fn split_sources(sources: &[PathBuf]) -> CljcResult<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut roots = Vec::new();
    let mut files = Vec::new();
    for source in sources {
        let path = absolute(source)?;
        if path.is_dir() {
            if !roots.contains(&path) {
                roots.push(path);
            }
        } else if path.is_file() {
            files.push(path);
        } else {
            warn!(source = %source.display(), "source does not exist, skipping");
        }
    }
    Ok((roots, files))
}

/// The batch runs when a located namespace's artifact is missing or older
/// than its source, or when a namespace with no source in any root has no
/// artifact yet.
fn needs_compile(namespaces: &[Namespace], located: &[LocatedNamespace], target: &Path) -> CljcResult<bool> {
    if !stale_namespaces(located, target)?.is_empty() {
        return Ok(true);
    }
    let unlocated_missing = namespaces
        .iter()
        .filter(|ns| !located.iter().any(|l| &l.namespace == *ns))
        .any(|ns| !target.join(ns.artifact_path()).exists());
    Ok(unlocated_missing)
}
