//! Shared types used by both pipeline stages.
//!
//! [`LoadError`] covers every fatal condition of the resolve and split stages;
//! [`Document`] is the only thing the pipeline hands downstream.

use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("can't get file info about {}: {source}", .path.display())]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no manifest files were found")]
    NoFilesFound,
    #[error("file reading failed for {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot determine the absolute file path of {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The path the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::PathAccess { path, .. }
            | LoadError::FileRead { path, .. }
            | LoadError::PathResolution { path, .. } => Some(path),
            LoadError::NoFilesFound => None,
        }
    }
}

/// One YAML document cut out of a manifest file.
///
/// `content` holds the original bytes of the segment, untrimmed. It is never
/// blank: whitespace-only segments are dropped by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Absolute path of the file the document came from
    pub origin_file: PathBuf,
    /// Raw document bytes, separator excluded
    pub content: Vec<u8>,
}

impl Document {
    /// Document content as text, with invalid UTF-8 replaced.
    pub fn content_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_access_message_names_path() {
        let err = LoadError::PathAccess {
            path: PathBuf::from("missing/app.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/app.yml"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn no_files_found_message() {
        assert_eq!(
            LoadError::NoFilesFound.to_string(),
            "no manifest files were found"
        );
        assert!(LoadError::NoFilesFound.path().is_none());
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error;
        let err = LoadError::FileRead {
            path: PathBuf::from("a.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("a.yaml")));
        assert!(err.source().is_some());
    }

    #[test]
    fn content_lossy_replaces_invalid_utf8() {
        let doc = Document {
            origin_file: PathBuf::from("/x.yml"),
            content: vec![b'a', 0xff, b'b'],
        };
        assert_eq!(doc.content_lossy(), "a\u{fffd}b");
    }
}
