//! Compile Use Case
//!
//! Builds a Clojure source tree, possibly interleaved with Scala, Groovy or
//! Java, into one output directory.
//!
//! This module handles:
//! - Choosing namespaces (detected or from `libs`)
//! - Rejecting namespaces defined in more than one root
//! - Composing the shared classpath
//! - Running the batched Clojure compile when artifacts are stale
//! - Copying resources and delegating secondary sources

mod options;
mod result;
mod use_case;


pub use options::CompileOptions;
pub use result::CompileReport;
pub use use_case::{list_namespaces, CompileUseCase};
