//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and repository I/O.
//!
//! ## Structure
//!
//! - `process` - Child process runner
//! - `repositories/` - Local artifact repository
//! - `compilers/` - javac, scalac and groovyc

pub mod compilers;
pub mod process;
pub mod repositories;

// Re-export for convenience
pub use compilers::{ExternalCompiler, ExternalCompilers, SecondaryCompilerKind};
pub use process::SystemCommandRunner;
pub use repositories::{LocalRepositoryResolver, DEFAULT_REPOSITORY};
