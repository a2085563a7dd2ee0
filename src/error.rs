//! Error types for cljc
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::{CommandOutput, DependencyResolutionError, SecondaryCompileError};

/// Result type alias for cljc operations
pub type CljcResult<T> = Result<T, CljcError>;

/// Main error type for cljc operations
#[derive(Error, Debug)]
pub enum CljcError {
    /// Required toolchain setting is missing or unusable
    #[error("configuration error: {message}\n  → Fix: set `{setting}` in cljc.toml or export {env_var}")]
    Configuration {
        message: String,
        setting: &'static str,
        env_var: &'static str,
    },

    /// The same namespace is defined under two source roots
    #[error("found duplicate namespace across multiple source dirs: {namespace}\n  → Files:\n    1. {}\n    2. {}", first.display(), second.display())]
    DuplicateNamespace {
        namespace: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A dependency could not be materialized into a file
    #[error(transparent)]
    DependencyResolution(#[from] DependencyResolutionError),

    /// The batched Clojure compile exited non-zero
    #[error("failed to compile ({status}):\n{output}")]
    Compile { status: String, output: String },

    /// The delegated secondary compiler failed
    #[error(transparent)]
    SecondaryCompile(#[from] SecondaryCompileError),

    /// A namespace name (usually from `libs`) is not a valid dotted identifier
    #[error("invalid namespace '{name}': {reason}")]
    InvalidNamespace { name: String, reason: String },

    /// A configured source root does not exist
    #[error("source root not found: {}", path.display())]
    SourceRootNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CljcError {
    /// Build a `Compile` error from a finished process
    pub fn compile_failed(output: &CommandOutput) -> Self {
        CljcError::Compile {
            status: output.status_description(),
            output: output.combined(),
        }
    }
}
