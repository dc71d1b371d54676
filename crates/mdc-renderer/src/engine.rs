//! The conversion engine.
//!
//! Walks the blank-stripped line sequence with a single forward cursor. At
//! each position: a start fence takes precedence over everything else;
//! otherwise the line is inline-rewritten, classified, and either emitted
//! as a single-line fragment, folded into a run with its same-kind
//! neighbors, or wrapped as a plain paragraph. The cursor only moves
//! forward; every invocation starts from a fresh cursor and empty buffers,
//! so concurrent conversions of different documents need no coordination.

use crate::block;
use crate::document;
use crate::error::RenderError;
use crate::fence;
use crate::group;
use crate::inline::rewrite_inline;
use crate::line::{FENCE_START, LineKind};

/// Convert the document's non-blank lines into one finished HTML string.
///
/// # Errors
///
/// Returns [`RenderError::UnterminatedFence`] when a fenced code block is
/// never closed; nothing partial is produced in that case.
pub fn convert(lines: &[String]) -> Result<String, RenderError> {
    Ok(document::assemble(&fragments(lines)?))
}

/// Produce the ordered HTML fragment sequence for the document, one
/// fragment per line, run, or fenced block.
///
/// # Errors
///
/// Returns [`RenderError::UnterminatedFence`] when a fenced code block is
/// never closed.
pub fn fragments(lines: &[String]) -> Result<Vec<String>, RenderError> {
    let mut fragments = Vec::new();
    let mut cursor = 0;
    while cursor < lines.len() {
        let raw = &lines[cursor];

        // Fence detection runs on the raw line, before any rewriting: fence
        // content must stay exempt from every other rule.
        if FENCE_START.is_match(raw) {
            let block = fence::extract(lines, cursor)?;
            fragments.push(block.fragment);
            cursor = block.next;
            continue;
        }

        let rewritten = rewrite_inline(raw);
        let kind = LineKind::classify(&rewritten);
        tracing::trace!(line = cursor, kind = ?kind, "classified line");
        if let Some(run_kind) = kind.run_kind() {
            let run = group::collect_run(lines, cursor, run_kind, &rewritten);
            fragments.push(run.fragment);
            cursor = run.next;
            continue;
        }
        let fragment = match kind {
            LineKind::Heading => block::heading_fragment(&rewritten),
            LineKind::Image => block::image_fragment(&rewritten),
            LineKind::Rule => block::rule_fragment(),
            // A stray closing fence has nothing to close and no other
            // pattern claims it; like any unrecognized line it becomes a
            // paragraph.
            _ => format!("<p>{rewritten}</p>"),
        };
        fragments.push(fragment);
        cursor += 1;
    }
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_owned()).collect()
    }

    #[test]
    fn test_plain_paragraphs() {
        let frags = fragments(&lines(&["one", "two"])).unwrap();
        assert_eq!(frags, vec!["<p>one</p>", "<p>two</p>"]);
    }

    #[test]
    fn test_heading_bounds() {
        let frags = fragments(&lines(&["# A", "###### F", "####### G"])).unwrap();
        assert_eq!(
            frags,
            vec!["<h1>A</h1>", "<h6>F</h6>", "<p>####### G</p>"]
        );
    }

    #[test]
    fn test_list_run_is_one_fragment_and_consumed_once() {
        let frags = fragments(&lines(&["- A", "- B", "- C", "tail"])).unwrap();
        assert_eq!(
            frags,
            vec!["<ul><li>A</li><li>B</li><li>C</li></ul>", "<p>tail</p>"]
        );
    }

    #[test]
    fn test_adjacent_runs_of_different_kinds() {
        let frags = fragments(&lines(&["- A", "1. B", "> C"])).unwrap();
        assert_eq!(
            frags,
            vec![
                "<ul><li>A</li></ul>",
                "<ol><li>B</li></ol>",
                "<blockquote>C<br/></blockquote>",
            ]
        );
    }

    #[test]
    fn test_table_between_prose() {
        let frags = fragments(&lines(&[
            "intro",
            "|ID|Name|",
            "|--|--|",
            "|1|Alice|",
            "outro",
        ]))
        .unwrap();
        assert_eq!(
            frags,
            vec![
                "<p>intro</p>",
                "<table><tr><th>ID</th><th>Name</th></tr><tr><td>1</td><td>Alice</td></tr></table>",
                "<p>outro</p>",
            ]
        );
    }

    #[test]
    fn test_fence_suppresses_all_other_rules() {
        let frags = fragments(&lines(&[
            "```md",
            "**not bold**",
            "- not a list",
            "```",
        ]))
        .unwrap();
        assert_eq!(
            frags,
            vec!["<pre><code>**not bold**\n- not a list</code></pre>"]
        );
    }

    #[test]
    fn test_unterminated_fence_fails_whole_conversion() {
        let err = fragments(&lines(&["fine", "```rust", "fn main() {}"])).unwrap_err();
        assert_eq!(err, RenderError::UnterminatedFence { line: 2 });
    }

    #[test]
    fn test_stray_closing_fence_is_a_paragraph() {
        let frags = fragments(&lines(&["```"])).unwrap();
        assert_eq!(frags, vec!["<p>```</p>"]);
    }

    #[test]
    fn test_inline_rewriting_applies_to_paragraphs() {
        let frags = fragments(&lines(&["**a** and _b_"])).unwrap();
        assert_eq!(frags, vec!["<p><b>a</b> and <i>b</i></p>"]);
    }

    #[test]
    fn test_marker_eaten_by_inline_rule_changes_classification() {
        // `* *a*` loses its bullet to the italic rule, so it is not a list
        // item by the time grouping sees it.
        let frags = fragments(&lines(&["* *a*"])).unwrap();
        assert_eq!(frags, vec!["<p><i> </i>a*</p>"]);
    }

    #[test]
    fn test_image_line() {
        let frags = fragments(&lines(&["![logo](logo.png)"])).unwrap();
        assert_eq!(frags, vec![r#"<img src="logo.png" alt="logo" />"#]);
    }

    #[test]
    fn test_horizontal_rule_line() {
        let frags = fragments(&lines(&["***", "---", "___"])).unwrap();
        assert_eq!(frags, vec!["<hr/>", "<hr/>", "<hr/>"]);
    }

    #[test]
    fn test_convert_wraps_in_shell() {
        let html = convert(&lines(&["# T"])).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>\n<h1>T</h1>\n</body>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_convert_empty_input() {
        let html = convert(&[]).unwrap();
        assert!(html.contains("<body>\n</body>"));
    }

    #[test]
    fn test_full_document() {
        let frags = fragments(&lines(&[
            "# Guide",
            "Some **bold** intro with a [link](https://example.com).",
            "- first",
            "- second",
            "> words to live by",
            "```sh",
            "make install",
            "```",
            "![diagram](d.png)",
            "---",
        ]))
        .unwrap();
        assert_eq!(
            frags,
            vec![
                "<h1>Guide</h1>",
                r#"<p>Some <b>bold</b> intro with a <a href="https://example.com">link</a>.</p>"#,
                "<ul><li>first</li><li>second</li></ul>",
                "<blockquote>words to live by<br/></blockquote>",
                "<pre><code>make install</code></pre>",
                r#"<img src="d.png" alt="diagram" />"#,
                "<hr/>",
            ]
        );
    }
}
