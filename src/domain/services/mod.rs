//! Domain Services
//!
//! The pipeline steps, leaf-first. The compile use case wires them together
//! in the order guard → classpath → compile → mirror → delegate.

pub mod classpath_composer;
pub mod compile_invoker;
pub mod duplicate_guard;
pub mod namespace_resolver;
pub mod resource_mirror;
pub mod secondary_detector;

pub use classpath_composer::compose;
pub use compile_invoker::{build_command, invoke, stale_namespaces};
pub use duplicate_guard::{locate_unique, LocatedNamespace};
pub use namespace_resolver::{detect_all, detect_namespaces};
pub use resource_mirror::{mirror, MirrorReport};
