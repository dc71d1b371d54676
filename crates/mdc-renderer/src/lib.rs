//! Pattern-based markdown to HTML conversion engine.
//!
//! This crate converts a small markdown dialect into an HTML document using
//! regular-expression pattern matching instead of a syntax tree. The engine
//! walks the document's non-blank lines with a single forward cursor:
//!
//! - [`rewrite_inline`] replaces inline constructs (emphasis, strikethrough,
//!   links, inline code) within one line.
//! - [`LineKind`] classifies a whole line into exactly one block construct,
//!   evaluated in a fixed priority order.
//! - Runs of consecutive same-kind lines (lists, quotes, tables) are folded
//!   into a single container fragment.
//! - Fenced code blocks are captured verbatim; once a start fence is seen,
//!   every other rule is suspended until the closing fence.
//!
//! The caller supplies the document as an ordered sequence of non-blank
//! lines (blank-line filtering is the line source's contract, see the
//! `mdc-storage` crate) and receives one finished HTML string.
//!
//! # Example
//!
//! ```
//! let lines: Vec<String> = ["# Title", "Some **bold** prose."]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! let html = mdc_renderer::convert(&lines).unwrap();
//! assert!(html.contains("<h1>Title</h1>"));
//! assert!(html.contains("<p>Some <b>bold</b> prose.</p>"));
//! ```

mod block;
mod document;
mod engine;
mod error;
mod fence;
mod group;
mod inline;
mod line;

pub use document::assemble;
pub use engine::{convert, fragments};
pub use error::RenderError;
pub use inline::rewrite_inline;
pub use line::LineKind;
