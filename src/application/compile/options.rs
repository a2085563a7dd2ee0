//! Compile options

use crate::config::CompileConfig;
use crate::domain::value_objects::{Namespace, SecondaryPolicy};
use crate::error::CljcResult;

/// Options for one compile run
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Explicit namespace list; `None` means detect from the source roots
    pub libs: Option<Vec<String>>,
    /// How many secondary languages to delegate to
    pub secondary_policy: SecondaryPolicy,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from the `[compile]` section. The per-compiler option bags
    /// are handed to the compiler factory instead.
    pub fn from_config(config: &CompileConfig) -> Self {
        Self {
            libs: config.libs.clone(),
            secondary_policy: config.secondary_policy,
        }
    }

    /// Set the explicit namespace list
    pub fn with_libs(mut self, libs: Option<Vec<String>>) -> Self {
        self.libs = libs;
        self
    }

    /// Set the secondary policy
    pub fn with_secondary_policy(mut self, policy: SecondaryPolicy) -> Self {
        self.secondary_policy = policy;
        self
    }

    /// Parse `libs` into namespaces, if set
    pub fn parsed_libs(&self) -> CljcResult<Option<Vec<Namespace>>> {
        self.libs
            .as_ref()
            .map(|libs| libs.iter().map(|l| Namespace::parse(l.trim())).collect())
            .transpose()
    }
}
