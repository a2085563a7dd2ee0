//! Configuration module for cljc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CLOJURE_HOME, CLJC_*)
//! 3. Project config (cljc.toml)
//! 4. User config (~/.config/cljc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, with_overrides_from, ConfigWarning};
pub use types::{
    CompileConfig, Config, ProjectConfig, SecondaryOptions, Toolchain, ToolchainConfig,
    CONFIG_FILE_NAME,
};
