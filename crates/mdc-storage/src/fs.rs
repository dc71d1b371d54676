//! Filesystem collaborators.
//!
//! [`FsLineSource`] reads one document from the local filesystem and
//! applies the blank-line filtering the source contract requires.
//! [`FsDocumentSink`] writes one finished HTML document, overwriting any
//! previous content.

use std::fs;
use std::path::PathBuf;

use crate::storage::{DocumentSink, LineSource, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem line source for a single document.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use mdc_storage::{FsLineSource, LineSource};
///
/// let source = FsLineSource::new(PathBuf::from("guide.md"));
/// let lines = source.lines()?;
/// ```
#[derive(Debug)]
pub struct FsLineSource {
    /// Path of the document to read.
    path: PathBuf,
}

impl FsLineSource {
    /// Create a line source for the document at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LineSource for FsLineSource {
    fn lines(&self) -> Result<Vec<String>, StorageError> {
        let text = fs::read_to_string(&self.path).map_err(|err| {
            StorageError::io(err, Some(self.path.clone())).with_backend(BACKEND)
        })?;
        let lines: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToOwned::to_owned)
            .collect();
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "read document");
        Ok(lines)
    }
}

/// Filesystem document sink for a single destination file.
#[derive(Debug)]
pub struct FsDocumentSink {
    /// Destination path; any existing file is overwritten.
    path: PathBuf,
}

impl FsDocumentSink {
    /// Create a sink writing to `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DocumentSink for FsDocumentSink {
    fn write(&self, html: &str) -> Result<(), StorageError> {
        fs::write(&self.path, html).map_err(|err| {
            StorageError::io(err, Some(self.path.clone())).with_backend(BACKEND)
        })?;
        tracing::debug!(path = %self.path.display(), bytes = html.len(), "wrote document");
        Ok(())
    }
}
