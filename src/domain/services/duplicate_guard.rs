//! Duplicate Guard
//!
//! A namespace must come from exactly one source root. The guard locates
//! every namespace's source file across all roots and stops at the first
//! namespace found twice, before anything is compiled.

use std::path::PathBuf;

use crate::domain::value_objects::Namespace;
use crate::error::{CljcError, CljcResult};

/// A namespace together with the file that defines it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedNamespace {
    pub namespace: Namespace,
    pub root: PathBuf,
    pub source: PathBuf,
}

/// Locate each namespace in `roots`.
///
/// Namespaces with no source file in any root (possible with an explicit
/// `libs` list naming something already on the classpath) are left out of
/// the result; they are still compiled, just never considered stale.
pub fn locate_unique(namespaces: &[Namespace], roots: &[PathBuf]) -> CljcResult<Vec<LocatedNamespace>> {
    let mut located = Vec::with_capacity(namespaces.len());

    for namespace in namespaces {
        let relative = namespace.source_path();
        let mut found: Option<LocatedNamespace> = None;

        for root in roots {
            let source = root.join(&relative);
            if !source.is_file() {
                continue;
            }
            if let Some(first) = &found {
                return Err(CljcError::DuplicateNamespace {
                    namespace: namespace.to_string(),
                    first: first.source.clone(),
                    second: source,
                });
            }
            found = Some(LocatedNamespace {
                namespace: namespace.clone(),
                root: root.clone(),
                source,
            });
        }

        located.extend(found);
    }

    Ok(located)
}
