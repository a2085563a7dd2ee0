//! Secondary JVM languages that may live alongside Clojure sources

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A non-primary JVM language whose files are handed to its own compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondaryLanguage {
    Scala,
    Groovy,
    Java,
}

impl SecondaryLanguage {
    /// Detection order. The first language with at least one matching file is
    /// the one delegated to: Scala, then Groovy, then Java.
    ///
    /// `scalac` and `groovyc` are handed the `.java` files too (joint
    /// compilation).
    pub const PRIORITY: [SecondaryLanguage; 3] = [
        SecondaryLanguage::Scala,
        SecondaryLanguage::Groovy,
        SecondaryLanguage::Java,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            SecondaryLanguage::Scala => "scala",
            SecondaryLanguage::Groovy => "groovy",
            SecondaryLanguage::Java => "java",
        }
    }

    /// Name of the compiler executable
    pub fn compiler(&self) -> &'static str {
        match self {
            SecondaryLanguage::Scala => "scalac",
            SecondaryLanguage::Groovy => "groovyc",
            SecondaryLanguage::Java => "javac",
        }
    }

    /// Extensions of the files handed to this language's compiler
    pub fn compiled_extensions(&self) -> &'static [&'static str] {
        match self {
            SecondaryLanguage::Scala => &["scala", "java"],
            SecondaryLanguage::Groovy => &["groovy", "java"],
            SecondaryLanguage::Java => &["java"],
        }
    }

    /// `path` has this language's own extension
    pub fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension())
    }

    /// `path` belongs in this language's compile unit
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| self.compiled_extensions().iter().any(|e| ext == *e))
    }
}

impl std::fmt::Display for SecondaryLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecondaryLanguage::Scala => write!(f, "scala"),
            SecondaryLanguage::Groovy => write!(f, "groovy"),
            SecondaryLanguage::Java => write!(f, "java"),
        }
    }
}

/// How many secondary languages a single build delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondaryPolicy {
    /// Only the highest-priority detected language is compiled
    #[default]
    FirstMatch,
    /// Every detected language is compiled, in priority order
    All,
}
