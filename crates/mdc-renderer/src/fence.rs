//! Fenced code block extraction.
//!
//! Once a start fence is seen, every other rule is suspended: each line is
//! captured verbatim (no inline rewriting, no block classification) until
//! the closing fence. A fence left open at end of input fails the whole
//! conversion; the rest of the document must not be swallowed silently.

use crate::error::RenderError;
use crate::line::{FENCE_END, fence_language};

/// One extracted fenced block, ready to be emitted.
#[derive(Debug)]
pub(crate) struct FencedBlock {
    /// The raw-code fragment for the whole block.
    pub(crate) fragment: String,
    /// Index of the first line after the closing fence.
    pub(crate) next: usize,
}

/// Capture the fenced block opened at `lines[start]`.
///
/// The language tag on the start fence is noted for diagnostics but not
/// emitted.
///
/// # Errors
///
/// Returns [`RenderError::UnterminatedFence`] when no closing fence exists
/// before end of input.
pub(crate) fn extract(lines: &[String], start: usize) -> Result<FencedBlock, RenderError> {
    let mut content: Vec<&str> = Vec::new();
    for (offset, line) in lines[start + 1..].iter().enumerate() {
        if FENCE_END.is_match(line) {
            tracing::debug!(
                language = fence_language(&lines[start]),
                lines = content.len(),
                "captured fenced block"
            );
            let fragment = format!("<pre><code>{}</code></pre>", content.join("\n"));
            return Ok(FencedBlock {
                fragment,
                next: start + offset + 2,
            });
        }
        content.push(line);
    }
    Err(RenderError::UnterminatedFence { line: start + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_owned()).collect()
    }

    #[test]
    fn test_extracts_block_and_advances_past_close() {
        let doc = lines(&["```rust", "fn main() {}", "```", "after"]);
        let block = extract(&doc, 0).unwrap();
        assert_eq!(block.fragment, "<pre><code>fn main() {}</code></pre>");
        assert_eq!(block.next, 3);
    }

    #[test]
    fn test_content_is_verbatim() {
        let doc = lines(&["```md", "**not bold**", "# not a heading", "- not a list", "```"]);
        let block = extract(&doc, 0).unwrap();
        assert_eq!(
            block.fragment,
            "<pre><code>**not bold**\n# not a heading\n- not a list</code></pre>"
        );
    }

    #[test]
    fn test_empty_block() {
        let doc = lines(&["```sh", "```"]);
        let block = extract(&doc, 0).unwrap();
        assert_eq!(block.fragment, "<pre><code></code></pre>");
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_close_must_be_bare() {
        // A tagged fence cannot close the block; the block stays open to
        // end of input.
        let doc = lines(&["```rust", "code", "```rust"]);
        let err = extract(&doc, 0).unwrap_err();
        assert_eq!(err, RenderError::UnterminatedFence { line: 1 });
    }

    #[test]
    fn test_unterminated_fence_is_an_error() {
        let doc = lines(&["prose", "```rust", "fn main() {}"]);
        let err = extract(&doc, 1).unwrap_err();
        assert_eq!(err, RenderError::UnterminatedFence { line: 2 });
    }
}
