//! Common test utilities for cljc scenario and CLI tests.
//!
//! This module provides:
//! - `TestProject`: isolated project directory with source roots
//! - `RecordingRunner`: fake `java`/`javac`/`scalac`/`groovyc` that writes
//!   class files and counts invocations
//! - `CliEnv`: runs the `cljc` binary with fake compiler scripts on PATH

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
