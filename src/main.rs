//! cljc CLI - incremental Clojure compilation orchestrator
//!
//! Usage: cljc <COMMAND>
//!
//! Commands:
//!   compile     Compile source roots into a class directory
//!   namespaces  List inferred namespaces per source root
//!   classpath   Print the composed classpath

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cljc::config::{Config, ConfigWarning};
use cljc::domain::value_objects::{DependencyRef, SecondaryPolicy};
use cljc::presentation::output::{
    render_classpath, render_compile, render_namespaces, render_warnings,
};
use cljc::presentation::{create_compile_use_case, Cli, Commands, OutputFormat};
use cljc::{list_namespaces, CompileOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = OutputFormat::from_flag(cli.json);
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let (config, warnings) = load_config(cli.config.as_deref(), &cwd)?;
    if format == OutputFormat::Text {
        eprint!("{}", render_warnings(&warnings));
    }

    match cli.command {
        Commands::Compile {
            sources,
            target,
            dependencies,
            libs,
            all_secondary,
        } => {
            let sources = or_configured(sources, &config.project.sources);
            let target = target.unwrap_or_else(|| config.project.target.clone());
            let dependencies = dependency_refs(&dependencies, &config);

            let mut options = CompileOptions::from_config(&config.compile);
            if libs.is_some() {
                options = options.with_libs(libs);
            }
            if all_secondary {
                options = options.with_secondary_policy(SecondaryPolicy::All);
            }

            let use_case = create_compile_use_case(&config, &cwd)?;
            let report = use_case.compile(&sources, &target, &dependencies, &options)?;
            print!("{}", render_compile(&report, format)?);
        }
        Commands::Namespaces { sources } => {
            let sources = or_configured(sources, &config.project.sources);
            let listed = list_namespaces(&sources)?;
            print!("{}", render_namespaces(&listed, format)?);
        }
        Commands::Classpath {
            sources,
            dependencies,
        } => {
            let sources = or_configured(sources, &config.project.sources);
            let dependencies = dependency_refs(&dependencies, &config);
            let use_case = create_compile_use_case(&config, &cwd)?;
            let classpath = use_case.classpath(&sources, &dependencies)?;
            print!("{}", render_classpath(&classpath, format)?);
        }
    }

    Ok(())
}

/// `-v` raises the level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},cljc={level}")));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose > 2)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => Ok(Config::load_or_default(Some(cwd))?),
    }
}

fn or_configured(given: Vec<PathBuf>, configured: &[PathBuf]) -> Vec<PathBuf> {
    if given.is_empty() {
        configured.to_vec()
    } else {
        given
    }
}

/// Command-line dependencies first, then those from the config file
fn dependency_refs(given: &[String], config: &Config) -> Vec<DependencyRef> {
    given
        .iter()
        .chain(&config.project.dependencies)
        .map(|spec| DependencyRef::parse(spec))
        .collect()
}
