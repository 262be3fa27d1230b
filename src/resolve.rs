//! Input path resolution.
//!
//! Stage 1 of the load pipeline. Turns the paths given on the command line
//! into the flat list of files the splitter reads.
//!
//! ## Rules
//!
//! - **Directories** are expanded one level deep. Only `*.yml` and `*.yaml`
//!   entries are kept, all `.yml` matches first, then all `.yaml` matches,
//!   each group sorted by file name.
//! - **Anything else** is taken verbatim, whatever its extension. Naming a
//!   file explicitly is taken as intent to load it.
//!
//! ```text
//! kedgify inspect app/ extra.txt
//!
//! app/
//! ├── web.yaml        → 3rd
//! ├── db.yml          → 1st
//! ├── redis.yml       → 2nd
//! ├── notes.md        (skipped)
//! └── nested/         (not descended into)
//!
//! extra.txt           → 4th
//! ```
//!
//! Resolution fails as soon as one input cannot be stat'd, and fails at the
//! end if nothing was found at all.

use crate::types::LoadError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extensions picked up when expanding a directory, in output order.
pub const MANIFEST_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Expand `paths` into the ordered list of manifest files to load.
pub fn resolve_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| LoadError::PathAccess {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            let matches = expand_directory(path)?;
            debug!(dir = %path.display(), matches = matches.len(), "expanded directory");
            files.extend(matches);
        } else {
            debug!(file = %path.display(), "using file as given");
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(LoadError::NoFilesFound);
    }
    Ok(files)
}

/// List the manifest files directly inside `dir`, grouped by extension.
fn expand_directory(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = list_files(dir)?;

    let mut matches = Vec::new();
    for ext in MANIFEST_EXTENSIONS {
        matches.extend(
            entries
                .iter()
                .filter(|p| has_extension(p, ext))
                .cloned(),
        );
    }
    Ok(matches)
}

/// Regular files directly inside `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            LoadError::PathAccess { path, source }
        })?;
        // Follows symlinks; directories and dangling links are left out
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Glob-style `*.<ext>` match: case-sensitive, hidden files included.
fn has_extension(path: &Path, ext: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    name.len() > ext.len()
        && name.ends_with(ext.as_bytes())
        && name[name.len() - ext.len() - 1] == b'.'
}
