//! Template tree copying.
//! The primary copy skips optional directories; enabled optional
//! directories are then copied verbatim under their destination names,
//! and placeholder files are moved to their real names.

use crate::error::{Error, Result};
use crate::manifest::{Features, Rename, TemplateManifest};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of [`copy_template`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination-relative files written, sorted.
    pub files: Vec<PathBuf>,
    /// Destination-relative optional directories that were materialized.
    pub optional_dirs: Vec<PathBuf>,
}

/// Creates `path` and its parents. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::fs(path, e))
}

/// Recursively copies `source` into `target`.
///
/// `keep` receives source-relative paths; returning false for a
/// directory prunes its whole subtree. Returns the target-relative files
/// copied, sorted so the result does not depend on traversal order.
///
/// # Errors
/// * `Error::FileSystemError` if `source` is not a directory or any
///   read, directory creation or copy fails
pub fn copy_tree<F>(source: &Path, target: &Path, keep: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    if !source.is_dir() {
        return Err(Error::fs(
            source,
            io::Error::new(io::ErrorKind::NotFound, "template directory does not exist"),
        ));
    }
    ensure_dir(target)?;

    let walker = WalkDir::new(source).min_depth(1).into_iter().filter_entry(|entry| {
        entry.path().strip_prefix(source).map(&keep).unwrap_or(false)
    });

    let mut copied = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source.to_path_buf());
            Error::fs(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::fs(entry.path(), io::Error::other(e)))?;
        let dest_path = target.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                ensure_dir(parent)?;
            }
            fs::copy(entry.path(), &dest_path).map_err(|e| Error::fs(&dest_path, e))?;
            debug!("Copied '{}'.", dest_path.display());
            copied.push(relative.to_path_buf());
        }
    }

    copied.sort();
    Ok(copied)
}

/// Moves placeholder files to their real names, replacing existing files.
fn apply_renames(renames: &[Rename], destination: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for rename in renames {
        let from = destination.join(&rename.placeholder);
        if !from.is_file() {
            continue;
        }

        let to = destination.join(&rename.target);
        if to.is_file() {
            fs::remove_file(&to).map_err(|e| Error::fs(&to, e))?;
        }
        fs::rename(&from, &to).map_err(|e| Error::fs(&from, e))?;
        debug!("Renamed '{}' to '{}'.", rename.placeholder.display(), rename.target.display());

        files.retain(|file| file != &rename.placeholder && file != &rename.target);
        files.push(rename.target.clone());
    }
    Ok(())
}

/// Materializes the template described by `manifest` into `destination`.
///
/// # Errors
/// * `Error::FileSystemError` if the template root is missing or any file
///   operation fails; files already written are left in place
pub fn copy_template(
    manifest: &TemplateManifest,
    destination: &Path,
    features: &Features,
) -> Result<CopyReport> {
    let root = &manifest.root;
    if !root.is_dir() {
        return Err(Error::fs(
            root,
            io::Error::new(io::ErrorKind::NotFound, "template root does not exist"),
        ));
    }

    ensure_dir(destination)?;

    debug!("Copying '{}' to '{}'.", root.display(), destination.display());
    let mut files = copy_tree(root, destination, |relative| !manifest.is_optional(relative))?;

    let mut optional_dirs = Vec::new();
    for dir in &manifest.optional_dirs {
        if !features.is_enabled(dir.feature) {
            debug!("Optional directory '{}' not requested.", dir.source);
            continue;
        }

        let source = root.join(&dir.source);
        if !source.is_dir() {
            debug!("Optional directory '{}' not present in template, skipping.", dir.source);
            continue;
        }

        let copied = copy_tree(&source, &destination.join(&dir.target), |_| true)?;
        files.extend(copied.into_iter().map(|file| dir.target.join(file)));
        optional_dirs.push(dir.target.clone());
    }

    apply_renames(&manifest.renames, destination, &mut files)?;
    files.sort();

    Ok(CopyReport { files, optional_dirs })
}
