//! Mock collaborators for testing.
//!
//! In-memory [`MockLineSource`] and [`MockDocumentSink`] for unit testing
//! without filesystem access.

use std::sync::RwLock;

use crate::storage::{DocumentSink, LineSource, StorageError, StorageErrorKind};

/// Mock line source serving configured lines.
///
/// Use the builder methods to configure test data. [`with_text`] applies
/// the same blank-line filtering a real source performs at load time.
///
/// [`with_text`]: MockLineSource::with_text
///
/// # Example
///
/// ```ignore
/// use mdc_storage::{LineSource, MockLineSource};
///
/// let source = MockLineSource::new().with_text("# Title\n\nprose\n");
/// assert_eq!(source.lines().unwrap(), vec!["# Title", "prose"]);
/// ```
#[derive(Debug, Default)]
pub struct MockLineSource {
    lines: Vec<String>,
    fail: bool,
}

impl MockLineSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the non-blank lines of `text`, stripping blank lines the way
    /// a real source does.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.lines.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(ToOwned::to_owned),
        );
        self
    }

    /// Append one line verbatim.
    #[must_use]
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    /// Make `lines()` fail, for error-path testing.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl LineSource for MockLineSource {
    fn lines(&self) -> Result<Vec<String>, StorageError> {
        if self.fail {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend("Mock"));
        }
        Ok(self.lines.clone())
    }
}

/// Mock document sink recording what was written.
#[derive(Debug, Default)]
pub struct MockDocumentSink {
    written: RwLock<Option<String>>,
    fail: bool,
}

impl MockDocumentSink {
    /// Create an empty mock sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `write()` fail, for error-path testing.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// The last written document, if any.
    #[must_use]
    pub fn written(&self) -> Option<String> {
        self.written.read().expect("sink lock poisoned").clone()
    }
}

impl DocumentSink for MockDocumentSink {
    fn write(&self, html: &str) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend("Mock"));
        }
        *self.written.write().expect("sink lock poisoned") = Some(html.to_owned());
        Ok(())
    }
}
