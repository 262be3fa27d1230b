//! Shared test utilities for the kedgify test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = write_file(tmp.path(), "app.yml", "a: 1\n---\nb: 2\n");
//! let docs = crate::load(&[path]).unwrap();
//! assert_eq!(document_texts(&docs), vec!["a: 1\n", "b: 2\n"]);
//! ```

use std::path::{Path, PathBuf};

use crate::types::Document;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// Extractors
// =========================================================================

/// File names (last component) of `paths`, in order.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.file_name()
                .unwrap_or_else(|| panic!("path has no file name: {}", p.display()))
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// Document contents as text, in order.
pub fn document_texts(docs: &[Document]) -> Vec<String> {
    docs.iter().map(|d| d.content_lossy().into_owned()).collect()
}
