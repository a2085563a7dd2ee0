//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::CompileUseCase;
use crate::config::Config;
use crate::error::CljcResult;
use crate::infrastructure::{ExternalCompilers, LocalRepositoryResolver, SystemCommandRunner};

/// Type alias for the concrete CompileUseCase with all dependencies
pub type ConcreteCompileUseCase = CompileUseCase<
    SystemCommandRunner,
    LocalRepositoryResolver,
    ExternalCompilers<SystemCommandRunner>,
>;

/// Create a compile use case with all dependencies wired up.
///
/// Relative dependency paths resolve against `base_dir`. Fails when the
/// toolchain is not configured.
pub fn create_compile_use_case(config: &Config, base_dir: &Path) -> CljcResult<ConcreteCompileUseCase> {
    let runner = SystemCommandRunner::new();
    let resolver = LocalRepositoryResolver::with_default(config.toolchain.repository.clone(), base_dir);
    let compilers = ExternalCompilers::new(runner, config.compile.clone());

    CompileUseCase::new(&config.toolchain, runner, resolver, compilers)
}
