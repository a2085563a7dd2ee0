//! Repository Implementations
//!
//! Concrete implementations of the artifact resolver port.

mod local;

pub use local::{LocalRepositoryResolver, DEFAULT_REPOSITORY};
