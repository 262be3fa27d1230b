//! # Kedgify
//!
//! Finds Kubernetes/Kedge YAML manifests and cuts them into individual
//! resource documents for a converter to consume.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Resolve   paths  →  files        (directories expanded to *.yml, *.yaml)
//! 2. Split     files  →  documents    (bytes cut at `---` separator lines)
//! ```
//!
//! [`load`] runs both stages. Each stage is also public on its own so callers
//! can resolve once and split later, or split bytes they already hold.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | Stage 1 — expands input paths into the ordered list of manifest files |
//! | [`split`] | Stage 2 — reads files and splits them into [`Document`]s |
//! | [`types`] | [`Document`] and the pipeline's [`LoadError`] |
//! | [`config`] | `kedgify.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting for the document inventory |
//!
//! # Design Decisions
//!
//! ## Splitting Before Parsing
//!
//! Multi-document YAML support in downstream parsers is unreliable, so
//! documents are separated at the byte level and each one is parsed alone.
//! The splitter never looks inside a document; semantic validation belongs to
//! the converter.
//!
//! ## All-or-Nothing Loads
//!
//! Any path that cannot be stat'd, read or made absolute fails the whole load.
//! There is no best-effort mode: a partial set of resources would deploy a
//! partial application.
//!
//! ## Explicit Files Skip the Extension Filter
//!
//! Directory expansion only picks up `*.yml` and `*.yaml`, but a file named
//! on the command line is loaded whatever it is called.

pub mod config;
pub mod output;
pub mod resolve;
pub mod split;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use types::{Document, LoadError};

use std::path::Path;
use tracing::info;

/// Resolve `paths` and split every resulting file into documents.
///
/// Documents come back in input order, and in order of appearance within
/// each file.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>, LoadError> {
    let files = resolve::resolve_files(paths)?;
    let documents = split::read_documents(&files)?;
    info!(
        files = files.len(),
        documents = documents.len(),
        "loaded manifests"
    );
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn load_directory_and_file() {
        let tmp = TempDir::new().unwrap();
        let app = tmp.path().join("app");
        std::fs::create_dir_all(&app).unwrap();
        write_file(&app, "web.yml", "name: web\n---\nname: web-svc\n");
        write_file(&app, "db.yaml", "name: db\n");
        let extra = write_file(tmp.path(), "extra.conf", "---\nname: extra\n");

        let docs = load(&[app.clone(), extra]).unwrap();

        assert_eq!(
            document_texts(&docs),
            vec!["name: web\n", "name: web-svc\n", "name: db\n", "name: extra\n"]
        );
        assert!(docs[0].origin_file.ends_with("app/web.yml"));
        assert!(docs[2].origin_file.ends_with("app/db.yaml"));
    }

    #[test]
    fn load_succeeds_with_zero_documents() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "blank.yml", "---\n\n---\n");

        let docs = load(&[path]).unwrap();

        assert!(docs.is_empty());
    }

    #[test]
    fn load_propagates_resolution_errors() {
        let tmp = TempDir::new().unwrap();

        assert!(matches!(
            load(&[tmp.path()]),
            Err(LoadError::NoFilesFound)
        ));
        assert!(matches!(
            load(&[tmp.path().join("nope")]),
            Err(LoadError::PathAccess { .. })
        ));
    }
}
