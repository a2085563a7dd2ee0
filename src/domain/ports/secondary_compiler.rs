//! SecondaryCompiler port
//!
//! Compilers for the non-primary JVM languages. The orchestrator computes
//! the unit of work; everything after hand-off belongs to the compiler.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{Classpath, SecondaryLanguage};

/// Errors raised by a delegated compiler. Passed through to the caller
/// without further wrapping.
#[derive(Debug, Error)]
pub enum SecondaryCompileError {
    #[error("{compiler} failed ({status}):\n{output}")]
    Failed {
        compiler: String,
        status: String,
        output: String,
    },

    #[error("could not launch {compiler}: {source}\n  → Fix: make sure {compiler} is installed and on PATH")]
    Launch {
        compiler: String,
        #[source]
        source: std::io::Error,
    },
}

/// Work handed to a secondary compiler
#[derive(Debug, Clone)]
pub struct DelegatedCompileUnit {
    pub language: SecondaryLanguage,
    /// Files matching the language's extension set, sorted
    pub files: Vec<PathBuf>,
    /// Dependencies, every source root, the runtime archive
    pub classpath: Classpath,
    /// Primary output directory
    pub target: PathBuf,
}

impl DelegatedCompileUnit {
    /// Files with the given extension
    pub fn files_with_extension<'a>(&'a self, ext: &'a str) -> impl Iterator<Item = &'a PathBuf> {
        self.files
            .iter()
            .filter(move |f| f.extension().is_some_and(|e| e == ext))
    }
}

pub trait SecondaryCompiler {
    fn language(&self) -> SecondaryLanguage;

    fn compile(&self, unit: &DelegatedCompileUnit) -> Result<(), SecondaryCompileError>;
}

/// Builds the compiler for a detected language
pub trait SecondaryCompilerFactory {
    fn create(&self, language: SecondaryLanguage) -> Box<dyn SecondaryCompiler + '_>;
}

impl<T: SecondaryCompilerFactory + ?Sized> SecondaryCompilerFactory for &T {
    fn create(&self, language: SecondaryLanguage) -> Box<dyn SecondaryCompiler + '_> {
        (**self).create(language)
    }
}
