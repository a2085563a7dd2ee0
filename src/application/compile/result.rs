//! Compile result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::MirrorReport;
use crate::domain::value_objects::{Classpath, Namespace, SecondaryLanguage};

/// What a compile run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompileReport {
    /// Output directory
    pub target: PathBuf,
    /// Namespaces handed to the Clojure compiler, in order
    pub namespaces: Vec<Namespace>,
    /// Classpath shared by every compiler (without the output directory)
    pub classpath: Classpath,
    /// Whether the batched Clojure compile ran
    pub compiled: bool,
    /// Resources written to the output directory
    pub copied: Vec<PathBuf>,
    /// Resources already up to date
    pub unchanged: Vec<PathBuf>,
    /// Secondary languages delegated to, in priority order
    pub secondary: Vec<SecondaryLanguage>,
}

impl CompileReport {
    pub fn new(target: PathBuf) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Fold a mirror pass into the report
    pub fn add_mirror(&mut self, report: MirrorReport) {
        self.copied.extend(report.copied);
        self.unchanged.extend(report.unchanged);
    }

    /// Nothing was compiled, copied or delegated
    pub fn is_up_to_date(&self) -> bool {
        !self.compiled && self.copied.is_empty() && self.secondary.is_empty()
    }
}
