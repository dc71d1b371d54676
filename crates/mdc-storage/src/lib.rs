//! Storage collaborators for the mdc conversion engine.
//!
//! The engine itself performs no I/O. This crate provides the two
//! interfaces that bound it:
//!
//! - [`LineSource`] supplies the ordered non-blank lines of the input
//!   document (blank-line filtering happens here, before the engine ever
//!   sees the data).
//! - [`DocumentSink`] accepts one finished HTML string and persists it,
//!   overwriting any existing destination.
//!
//! Abstracting both sides behind traits enables unit testing without
//! touching the real filesystem and keeps backend choice out of the core.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdc_storage::{FsLineSource, LineSource};
//!
//! let source = FsLineSource::new(PathBuf::from("guide.md"));
//! for line in source.lines()? {
//!     println!("{line}");
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::{FsDocumentSink, FsLineSource};
#[cfg(feature = "mock")]
pub use mock::{MockDocumentSink, MockLineSource};
pub use storage::{DocumentSink, LineSource, StorageError, StorageErrorKind};
