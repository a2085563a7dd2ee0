//! Configuration loading
//!
//! Environment variables are read here and nowhere else; the orchestrator
//! only ever sees the resulting `Config`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::SecondaryPolicy;
use crate::error::{CljcError, CljcResult};

use super::types::{Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CljcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse `content` as if read from `path`
pub fn parse_with_warnings(content: &str, path: &Path) -> CljcResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CljcError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project `cljc.toml`, then the user config, then defaults. Environment
/// overrides are applied last.
pub fn load_or_default(project_root: Option<&Path>) -> CljcResult<(Config, Vec<ConfigWarning>)> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("cljc").join("config.toml"));
    }

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Same as [`with_env_overrides`] with an injectable lookup (for tests)
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(home) = non_empty("CLOJURE_HOME") {
        config.toolchain.clojure_home = Some(PathBuf::from(home));
    }

    if let Some(java) = non_empty("CLJC_JAVA") {
        config.toolchain.java = PathBuf::from(java);
    }

    if let Some(repository) = non_empty("CLJC_REPOSITORY") {
        config.toolchain.repository = Some(PathBuf::from(repository));
    }

    if let Some(policy) = non_empty("CLJC_SECONDARY_POLICY") {
        match policy.trim().to_lowercase().as_str() {
            "first-match" | "first" => config.compile.secondary_policy = SecondaryPolicy::FirstMatch,
            "all" => config.compile.secondary_policy = SecondaryPolicy::All,
            other => {
                let hint = match closest(other, &["first-match", "all"]) {
                    Some(s) => format!(". Did you mean '{}'?", s),
                    None => String::new(),
                };
                warn!(
                    "invalid CLJC_SECONDARY_POLICY value '{}'{}; valid values: first-match, all",
                    other, hint
                );
            }
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "toolchain",
        "clojure_home",
        "runtime_jar",
        "java",
        "repository",
        "compile",
        "libs",
        "secondary_policy",
        "javac",
        "scalac",
        "groovyc",
        "source",
        "target",
        "debug",
        "warnings",
        "other",
        "project",
        "sources",
        "dependencies",
    ];
    closest(unknown, CANDIDATES).map(str::to_string)
}

/// Nearest candidate within two edits
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && dist > 0 => Some(candidate),
        _ => None,
    }
}

/// Edit distance used for typo suggestions
fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
