//! Multi-document splitting.
//!
//! Stage 2 of the load pipeline. Reads each resolved file and cuts it into
//! YAML documents at `---` separator lines. Splitting happens on raw bytes,
//! before any YAML parsing, so the downstream parser only ever sees one
//! document at a time.
//!
//! ## Separator
//!
//! A separator is `---` at the very start of the content or right after a
//! `\n`, and itself followed by `\n`. The separator line is dropped; the
//! newline in front of it stays with the preceding document.
//!
//! ```text
//! ---            ← separator (start of content)
//! name: web      ┐
//! image: nginx   ┘ document 1
//! ---            ← separator
//! name: db       ] document 2
//! ---            ← separator
//!                ← blank, dropped
//! ```
//!
//! `key: ---value`, `--- # comment` and a final `---` with no newline after it
//! are all left alone.
//!
//! Segments that are empty or whitespace-only are dropped, which takes care of
//! leading and trailing separators as well as runs of consecutive ones.

use crate::types::{Document, LoadError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SEPARATOR: &[u8] = b"---\n";

/// Split `content` into its non-blank documents, in order of appearance.
///
/// Returned slices borrow from `content` and are not trimmed.
pub fn split_documents(content: &[u8]) -> Vec<&[u8]> {
    let mut documents = Vec::new();
    let mut doc_start = 0;
    let mut line_start = 0;

    while line_start < content.len() {
        if content[line_start..].starts_with(SEPARATOR) {
            push_if_not_blank(&mut documents, &content[doc_start..line_start]);
            doc_start = line_start + SEPARATOR.len();
            line_start = doc_start;
            continue;
        }
        match content[line_start..].iter().position(|&b| b == b'\n') {
            Some(offset) => line_start += offset + 1,
            None => break,
        }
    }
    push_if_not_blank(&mut documents, &content[doc_start..]);

    documents
}

fn push_if_not_blank<'a>(documents: &mut Vec<&'a [u8]>, segment: &'a [u8]) {
    if !is_blank(segment) {
        documents.push(segment);
    }
}

/// True when `segment` has nothing but whitespace in it.
fn is_blank(segment: &[u8]) -> bool {
    match std::str::from_utf8(segment) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => segment.trim_ascii().is_empty(),
    }
}

/// Read and split every file, in order.
///
/// All-or-nothing: the first file that cannot be read or resolved to an
/// absolute path aborts the whole batch.
pub fn read_documents<P: AsRef<Path>>(files: &[P]) -> Result<Vec<Document>, LoadError> {
    let mut documents = Vec::new();

    for file in files {
        let file = file.as_ref();
        let content = fs::read(file).map_err(|source| LoadError::FileRead {
            path: file.to_path_buf(),
            source,
        })?;
        let origin_file = absolute_path(file)?;

        let before = documents.len();
        documents.extend(split_documents(&content).into_iter().map(|doc| Document {
            origin_file: origin_file.clone(),
            content: doc.to_vec(),
        }));
        debug!(
            file = %origin_file.display(),
            documents = documents.len() - before,
            "split file"
        );
    }

    Ok(documents)
}

/// Make `path` absolute against the current directory without touching
/// symlinks.
fn absolute_path(path: &Path) -> Result<PathBuf, LoadError> {
    std::path::absolute(path).map_err(|source| LoadError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}
