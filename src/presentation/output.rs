//! Output Rendering
//!
//! Human-readable text or JSON for scripting. Renderers return strings so
//! the caller decides where they go.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde_json::json;

use crate::application::CompileReport;
use crate::config::ConfigWarning;
use crate::domain::value_objects::{Classpath, Namespace};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render_compile(report: &CompileReport, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(&json!({
            "event": "compile",
            "status": "success",
            "report": report,
        }));
    }

    let mut out = String::new();
    if report.is_up_to_date() {
        let _ = writeln!(out, "✓ Already Up-to-date");
        let _ = writeln!(
            out,
            "  {} namespaces → {}",
            report.namespaces.len(),
            report.target.display()
        );
        return Ok(out);
    }

    let _ = writeln!(out, "✓ Compile Complete");
    let _ = writeln!(out);
    let _ = writeln!(out, "  Target: {}", report.target.display());
    if report.compiled {
        let _ = writeln!(out, "  Compiled {} namespaces", report.namespaces.len());
    } else {
        let _ = writeln!(out, "  {} namespaces already up-to-date", report.namespaces.len());
    }
    if !report.copied.is_empty() {
        let _ = writeln!(out, "  Copied {} resources", report.copied.len());
    }
    for language in &report.secondary {
        let _ = writeln!(out, "  Delegated {} sources to {}", language, language.compiler());
    }
    Ok(out)
}

pub fn render_namespaces(
    listed: &[(PathBuf, Vec<Namespace>)],
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        let roots: Vec<_> = listed
            .iter()
            .map(|(root, namespaces)| json!({ "root": root, "namespaces": namespaces }))
            .collect();
        return serde_json::to_string_pretty(&json!({ "event": "namespaces", "roots": roots }));
    }

    let mut out = String::new();
    for (root, namespaces) in listed {
        let _ = writeln!(out, "{} ({})", root.display(), namespaces.len());
        for namespace in namespaces {
            let _ = writeln!(out, "  {}", namespace);
        }
    }
    Ok(out)
}

/// Text mode prints the joined classpath on one line, ready for `java -cp`
pub fn render_classpath(classpath: &Classpath, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(&json!({
            "event": "classpath",
            "entries": classpath,
        }));
    }
    Ok(format!("{}\n", classpath.to_os_string().to_string_lossy()))
}

pub fn render_warnings(warnings: &[ConfigWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("Warning: {}\n", w))
        .collect()
}
