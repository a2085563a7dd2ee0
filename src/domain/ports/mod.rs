//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_resolver;
pub mod command_runner;
pub mod secondary_compiler;

pub use artifact_resolver::{ArtifactResolver, DependencyResolutionError};
pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use secondary_compiler::{
    DelegatedCompileUnit, SecondaryCompileError, SecondaryCompiler, SecondaryCompilerFactory,
};
