//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SecondaryLanguage, SecondaryPolicy};
use crate::error::{CljcError, CljcResult};

use super::loader::{self, ConfigWarning};

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "cljc.toml";

/// Where the JVM tools live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Clojure installation; `clojure.jar` is expected directly inside
    #[serde(default)]
    pub clojure_home: Option<PathBuf>,

    /// Explicit runtime archive, overriding `<clojure_home>/clojure.jar`
    #[serde(default)]
    pub runtime_jar: Option<PathBuf>,

    #[serde(default = "default_java")]
    pub java: PathBuf,

    /// Local artifact repository used to resolve coordinates
    #[serde(default)]
    pub repository: Option<PathBuf>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            clojure_home: None,
            runtime_jar: None,
            java: default_java(),
            repository: None,
        }
    }
}

fn default_java() -> PathBuf {
    PathBuf::from("java")
}

/// Validated toolchain handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub runtime_jar: PathBuf,
    pub java: PathBuf,
}

impl ToolchainConfig {
    /// Check required settings. A missing Clojure location is an error here,
    /// before any build step runs.
    pub fn validate(&self) -> CljcResult<Toolchain> {
        let runtime_jar = match (&self.runtime_jar, &self.clojure_home) {
            (Some(jar), _) => jar.clone(),
            (None, Some(home)) => home.join("clojure.jar"),
            (None, None) => {
                return Err(CljcError::Configuration {
                    message: "are we forgetting something? CLOJURE_HOME not set".to_string(),
                    setting: "toolchain.clojure_home",
                    env_var: "CLOJURE_HOME",
                })
            }
        };
        if self.java.as_os_str().is_empty() {
            return Err(CljcError::Configuration {
                message: "java executable is empty".to_string(),
                setting: "toolchain.java",
                env_var: "CLJC_JAVA",
            });
        }
        Ok(Toolchain {
            runtime_jar,
            java: self.java.clone(),
        })
    }
}

/// Options bag forwarded to one secondary compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryOptions {
    /// Source language level (`-source` for javac)
    #[serde(default)]
    pub source: Option<String>,

    /// Target bytecode level
    #[serde(default)]
    pub target: Option<String>,

    /// Emit debug information
    #[serde(default)]
    pub debug: bool,

    /// Show compiler warnings; off means `-nowarn`
    #[serde(default = "default_true")]
    pub warnings: bool,

    /// Extra arguments passed through untouched
    #[serde(default)]
    pub other: Vec<String>,
}

impl Default for SecondaryOptions {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            debug: false,
            warnings: true,
            other: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Compile step configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompileConfig {
    /// Explicit namespace list; replaces detection when set
    #[serde(default)]
    pub libs: Option<Vec<String>>,

    #[serde(default)]
    pub secondary_policy: SecondaryPolicy,

    #[serde(default)]
    pub javac: SecondaryOptions,

    #[serde(default)]
    pub scalac: SecondaryOptions,

    #[serde(default)]
    pub groovyc: SecondaryOptions,
}

impl CompileConfig {
    pub fn secondary_options(&self, language: SecondaryLanguage) -> &SecondaryOptions {
        match language {
            SecondaryLanguage::Scala => &self.scalac,
            SecondaryLanguage::Groovy => &self.groovyc,
            SecondaryLanguage::Java => &self.javac,
        }
    }
}

/// Project layout defaults, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,

    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Paths or `group:artifact:version` coordinates
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            target: default_target(),
            dependencies: Vec::new(),
        }
    }
}

fn default_sources() -> Vec<PathBuf> {
    vec![
        PathBuf::from("src/main/clojure"),
        PathBuf::from("src/main/java"),
        PathBuf::from("src/main/scala"),
        PathBuf::from("src/main/groovy"),
    ]
}

fn default_target() -> PathBuf {
    PathBuf::from("target/classes")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub project: ProjectConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CljcResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CljcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults; then apply
    /// environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> CljcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
