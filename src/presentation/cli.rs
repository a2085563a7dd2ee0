//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all
//! subcommands. Anything not given on the command line falls back to
//! `cljc.toml`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cljc - incremental Clojure + JVM compilation orchestrator
#[derive(Parser, Debug)]
#[command(name = "cljc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./cljc.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile source roots into a class directory
    Compile {
        /// Source roots or single files (repeatable)
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Dependency path or group:artifact:version (repeatable)
        #[arg(short, long = "dependency")]
        dependencies: Vec<String>,

        /// Namespaces to compile instead of detecting them
        #[arg(long, value_delimiter = ',')]
        libs: Option<Vec<String>>,

        /// Delegate to every detected secondary language, not just the first
        #[arg(long)]
        all_secondary: bool,
    },

    /// List the namespaces inferred for each source root
    Namespaces {
        /// Source roots (repeatable)
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,
    },

    /// Print the classpath a compile would use
    Classpath {
        /// Source roots (repeatable)
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,

        /// Dependency path or group:artifact:version (repeatable)
        #[arg(short, long = "dependency")]
        dependencies: Vec<String>,
    },
}
