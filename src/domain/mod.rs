//! Domain Layer
//!
//! The orchestration rules: how namespaces are inferred, how the classpath
//! is assembled, when a compile is needed.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Namespace, Classpath, DependencyRef)
//! - `services/` - Pipeline steps (resolver, guard, composer, invoker, mirror, detector)
//! - `ports/` - Interface definitions for infrastructure
//!
//! Everything that launches a process goes through a port.

pub mod ports;
pub mod services;
pub mod value_objects;
