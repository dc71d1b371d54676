//! Rendering error types.

/// Error raised while converting a document.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A fenced code block was opened but never closed before end of input.
    ///
    /// The line number is the 1-based position of the opening fence within
    /// the blank-stripped line sequence the engine operates on.
    #[error("unterminated fenced code block opened at line {line}")]
    UnterminatedFence {
        /// Position of the opening fence.
        line: usize,
    },
}
