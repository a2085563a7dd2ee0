//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod classpath;
mod dependency;
mod language;
mod namespace;

pub use classpath::Classpath;
pub use dependency::{ArtifactCoordinate, DependencyRef};
pub use language::{SecondaryLanguage, SecondaryPolicy};
pub use namespace::{is_source_file, Namespace, ARTIFACT_SUFFIX, SOURCE_EXTENSION};
