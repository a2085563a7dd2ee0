//! Application Layer
//!
//! Use cases that orchestrate the build.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain build rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Guard, classpath, compile, mirror, delegate

pub mod compile;

pub use compile::{list_namespaces, CompileOptions, CompileReport, CompileUseCase};
