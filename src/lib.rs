//! cljc - incremental Clojure compilation orchestrator
//!
//! cljc compiles a Clojure source tree ahead of time into a class directory,
//! copies everything that is not compiled alongside, and hands co-located
//! Scala, Groovy or Java sources to their own compiler with the same
//! classpath.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{list_namespaces, CompileOptions, CompileReport, CompileUseCase};
pub use config::{Config, ConfigWarning, Toolchain, ToolchainConfig};
pub use domain::value_objects::{
    ArtifactCoordinate, Classpath, DependencyRef, Namespace, SecondaryLanguage, SecondaryPolicy,
};
pub use error::{CljcError, CljcResult};
pub use infrastructure::{ExternalCompilers, LocalRepositoryResolver, SystemCommandRunner};
