//! Secondary Language Delegator: detection half
//!
//! Languages are checked in [`SecondaryLanguage::PRIORITY`] order and the
//! first with at least one matching file wins. That order is part of the
//! contract: a tree holding both `.groovy` and `.java` files goes to
//! `groovyc`, never `javac`.

use std::path::PathBuf;

use crate::domain::value_objects::{SecondaryLanguage, SecondaryPolicy};

fn present(language: SecondaryLanguage, files: &[PathBuf]) -> bool {
    files.iter().any(|f| language.matches(f))
}

/// The highest-priority language with a file in `files`
pub fn detect(files: &[PathBuf]) -> Option<SecondaryLanguage> {
    SecondaryLanguage::PRIORITY
        .into_iter()
        .find(|language| present(*language, files))
}

/// Every language present in `files`, in priority order
pub fn detect_all(files: &[PathBuf]) -> Vec<SecondaryLanguage> {
    SecondaryLanguage::PRIORITY
        .into_iter()
        .filter(|language| present(*language, files))
        .collect()
}

/// Languages to delegate to under `policy`
pub fn select(files: &[PathBuf], policy: SecondaryPolicy) -> Vec<SecondaryLanguage> {
    match policy {
        SecondaryPolicy::FirstMatch => detect(files).into_iter().collect(),
        SecondaryPolicy::All => detect_all(files),
    }
}

/// Compile units for `policy`, in delegation order.
///
/// Each file is handed to exactly one compiler. A joint compiler earlier in
/// the order claims the `.java` files, so a later `javac` only runs when
/// Java files are left over, and never recompiles what `groovyc` or
/// `scalac` already took.
pub fn plan(files: &[PathBuf], policy: SecondaryPolicy) -> Vec<(SecondaryLanguage, Vec<PathBuf>)> {
    let mut remaining = files.to_vec();
    let mut units = Vec::new();

    for language in select(files, policy) {
        if !present(language, &remaining) {
            continue;
        }
        let (claimed, rest): (Vec<PathBuf>, Vec<PathBuf>) =
            remaining.into_iter().partition(|f| language.accepts(f));
        remaining = rest;
        units.push((language, claimed));
    }
    units
}
