//! Resource Mirror
//!
//! Copies everything under a source root that the Clojure compiler did not
//! consume into the output directory, at the same relative path. One-shot:
//! files removed from the root are not removed from the output.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::value_objects::Namespace;
use crate::error::{CljcError, CljcResult};
use crate::fs::{copy_atomic, is_up_to_date, walk_files};

/// What a mirror pass did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MirrorReport {
    /// Output paths written
    pub copied: Vec<PathBuf>,
    /// Output paths already up to date
    pub unchanged: Vec<PathBuf>,
}

/// Mirror `root` into `target`, skipping source files of `excluded`
/// namespaces.
pub fn mirror(root: &Path, target: &Path, excluded: &HashSet<Namespace>) -> CljcResult<MirrorReport> {
    if !root.is_dir() {
        return Err(CljcError::SourceRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut report = MirrorReport::default();
    for source in walk_files(root, Some(target))? {
        let Ok(relative) = source.strip_prefix(root) else {
            continue;
        };
        if Namespace::from_relative_path(relative).is_some_and(|ns| excluded.contains(&ns)) {
            continue;
        }

        let destination = target.join(relative);
        if is_up_to_date(&destination, &source)? {
            report.unchanged.push(destination);
            continue;
        }

        // directories are created only once a file actually lands in them
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        copy_atomic(&source, &destination)?;
        trace!(from = %source.display(), to = %destination.display(), "copied resource");
        report.copied.push(destination);
    }

    debug!(
        root = %root.display(),
        copied = report.copied.len(),
        unchanged = report.unchanged.len(),
        "mirrored resources"
    );
    Ok(report)
}
