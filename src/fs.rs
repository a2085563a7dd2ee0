//! File system helpers shared by the pipeline steps
//!
//! Directory walks are always sorted by file name so namespace order and
//! copy order are reproducible across runs and platforms.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tempfile::NamedTempFile;
use tracing::warn;

/// Regular files under `root` in sorted depth-first order.
///
/// Symlinks are followed; a link back to one of its own ancestors is
/// reported and skipped. The `skip` directory, if given, is not entered.
pub fn walk_files(root: &Path, skip: Option<&Path>) -> io::Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));
    if let Some(skip) = skip {
        let skip = skip.to_path_buf();
        builder.filter_entry(move |entry| entry.path() != skip.as_path());
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_loop(&err) => {
                warn!(error = %err, "skipping symlink loop");
                continue;
            }
            Err(err) => return Err(io::Error::other(err)),
        };
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}

/// Every regular file reachable from `sources`, sorted and de-duplicated.
///
/// Directories are walked recursively (hidden files and ignore files are not
/// special); plain files are taken as they are.
pub fn list_files(sources: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            files.extend(walk_files(source, None)?);
        } else if source.is_file() {
            files.push(source.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// True when `output` exists and is not older than `input`.
///
/// A missing `input` counts as up to date; there is nothing to rebuild from.
pub fn is_up_to_date(output: &Path, input: &Path) -> io::Result<bool> {
    let output_modified = match fs::metadata(output) {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    let input_modified = match fs::metadata(input) {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };
    Ok(output_modified >= input_modified)
}

/// Copy `from` to `to` byte-for-byte through a temp file in the destination
/// directory, then rename into place. The parent of `to` must exist.
pub fn copy_atomic(from: &Path, to: &Path) -> io::Result<()> {
    let parent = to
        .parent()
        .ok_or_else(|| io::Error::other(format!("no parent directory for {}", to.display())))?;

    let mut source = fs::File::open(from)?;
    let permissions = source.metadata()?.permissions();

    let mut temp = NamedTempFile::new_in(parent)?;
    io::copy(&mut source, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    temp.persist(to).map_err(|e| e.error)?;

    fs::set_permissions(to, permissions)
}

/// Absolute form of `path` without touching the file system
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}
