//! CLI output formatting for loaded documents.
//!
//! # Text Inventory
//!
//! Documents are grouped under the file they came from. Each file gets a
//! positional header with its document count, each document a positional
//! line with its first line of content, followed by an indented preview.
//!
//! ```text
//! Files
//! 001 /work/app/web.yml (2 documents)
//!     001 name: web
//!             image: nginx
//!     002 name: web-svc
//!
//! Loaded 2 documents from 1 file
//! ```
//!
//! # JSON
//!
//! An array of `{ "origin_file": ..., "content": ... }` objects in load
//! order. Content is emitted as UTF-8 with invalid bytes replaced.
//!
//! # Architecture
//!
//! `format_*` functions are pure and return the output; `print_*` wrappers
//! write it to stdout.

use crate::config::{OutputConfig, OutputFormat};
use crate::types::Document;
use serde::Serialize;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Non-blank lines of a document, in order.
fn content_lines(doc: &Document) -> Vec<String> {
    doc.content_lossy()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Group consecutive documents sharing an origin file.
fn group_by_file(documents: &[Document]) -> Vec<(&Path, &[Document])> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=documents.len() {
        if i == documents.len() || documents[i].origin_file != documents[start].origin_file {
            groups.push((documents[start].origin_file.as_path(), &documents[start..i]));
            start = i;
        }
    }
    groups
}

// ============================================================================
// Text inventory
// ============================================================================

/// Format the document inventory.
///
/// `preview_lines` limits how many content lines follow each document header;
/// the header itself already shows the first one.
pub fn format_inventory(documents: &[Document], preview_lines: usize) -> Vec<String> {
    let mut lines = vec!["Files".to_string()];
    let groups = group_by_file(documents);

    for (file_idx, (file, docs)) in groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(file_idx + 1),
            file.display(),
            plural(docs.len(), "document")
        ));

        for (doc_idx, doc) in docs.iter().enumerate() {
            let content = content_lines(doc);
            let first = content.first().map(String::as_str).unwrap_or_default();
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(doc_idx + 1),
                first.trim()
            ));
            for extra in content.iter().skip(1).take(preview_lines.saturating_sub(1)) {
                lines.push(format!("{}{}", indent(3), extra));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Loaded {} from {}",
        plural(documents.len(), "document"),
        plural(groups.len(), "file")
    ));
    lines
}

// ============================================================================
// JSON
// ============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    origin_file: String,
    content: std::borrow::Cow<'a, str>,
}

/// Format documents as a pretty-printed JSON array.
pub fn format_json(documents: &[Document]) -> Result<String, serde_json::Error> {
    let docs: Vec<JsonDocument> = documents
        .iter()
        .map(|d| JsonDocument {
            origin_file: d.origin_file.display().to_string(),
            content: d.content_lossy(),
        })
        .collect();
    serde_json::to_string_pretty(&docs)
}

/// Print documents to stdout in the configured format.
pub fn print_documents(
    documents: &[Document],
    config: &OutputConfig,
) -> Result<(), serde_json::Error> {
    match config.format {
        OutputFormat::Text => {
            for line in format_inventory(documents, config.preview_lines) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", format_json(documents)?),
    }
    Ok(())
}
