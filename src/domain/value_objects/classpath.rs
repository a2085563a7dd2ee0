//! Classpath value object
//!
//! Ordered, de-duplicated list of locations consulted for symbol resolution.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// An ordered classpath. Pushing an entry that is already present is a no-op,
/// so the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classpath {
    entries: Vec<PathBuf>,
    #[serde(skip)]
    seen: HashSet<PathBuf>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it is already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn push(&mut self, entry: impl Into<PathBuf>) -> bool {
        let entry = entry.into();
        if self.seen.contains(&entry) {
            return false;
        }
        self.seen.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    pub fn extend<I, P>(&mut self, entries: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &Path) -> bool {
        self.seen.contains(entry)
    }

    /// Copy of this classpath with `extra` appended (still de-duplicated)
    pub fn with_entry(&self, extra: impl Into<PathBuf>) -> Self {
        let mut cp = self.clone();
        cp.push(extra);
        cp
    }

    /// Join entries with the platform path-list separator (`:` or `;`).
    pub fn to_os_string(&self) -> OsString {
        let separator = if cfg!(windows) { ";" } else { ":" };
        let mut joined = OsString::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                joined.push(separator);
            }
            joined.push(entry.as_os_str());
        }
        joined
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Classpath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut cp = Classpath::new();
        cp.extend(iter);
        cp
    }
}
