//! Namespace Resolver
//!
//! Infers one namespace per `.clj` file from its location under a source
//! root. A `.clj` file whose path cannot be read back as its namespace
//! (a dot in a directory name or stem) is skipped with a warning.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::value_objects::{is_source_file, Namespace};
use crate::error::{CljcError, CljcResult};
use crate::fs::walk_files;

/// All namespaces under `root`, in sorted directory-walk order.
pub fn detect_namespaces(root: &Path) -> CljcResult<Vec<Namespace>> {
    if !root.is_dir() {
        return Err(CljcError::SourceRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut namespaces = Vec::new();
    for file in walk_files(root, None)? {
        let Ok(relative) = file.strip_prefix(root) else {
            continue;
        };
        if !is_source_file(relative) {
            continue;
        }
        match Namespace::from_relative_path(relative) {
            Some(ns) => namespaces.push(ns),
            None => warn!(
                path = %file.display(),
                "source path does not map to a namespace, skipping"
            ),
        }
    }

    debug!(root = %root.display(), count = namespaces.len(), "detected namespaces");
    Ok(namespaces)
}

/// Namespaces of several roots, concatenated in root order
pub fn detect_all<P: AsRef<Path>>(roots: &[P]) -> CljcResult<Vec<Namespace>> {
    let mut all = Vec::new();
    for root in roots {
        all.extend(detect_namespaces(root.as_ref())?);
    }
    Ok(all)
}
