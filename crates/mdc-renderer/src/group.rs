//! Contiguous-block grouping.
//!
//! Folds a run of consecutive same-kind lines (list items, quote lines,
//! table rows) into one container fragment. The run ends at the first line
//! that classifies differently or at end of input; the termination test
//! never looks past a non-matching line. Run state lives entirely in the
//! local accumulator here; nothing survives between runs.

use std::fmt::Write;

use crate::inline::rewrite_inline;
use crate::line::{LineKind, ORDERED_ITEM, QUOTE_LINE, RunKind, TABLE_ROW, UNORDERED_ITEM};

/// One collected run, ready to be emitted.
pub(crate) struct Run {
    /// The single container fragment for the whole run.
    pub(crate) fragment: String,
    /// Index of the first line after the run.
    pub(crate) next: usize,
}

/// Collect the run of `kind` lines starting at `start` and emit its
/// fragment.
///
/// `first_rewritten` is the already inline-rewritten text of `lines[start]`;
/// subsequent lines are rewritten here before their classification is
/// tested, since grouping operates on pre-processed line content.
pub(crate) fn collect_run(
    lines: &[String],
    start: usize,
    kind: RunKind,
    first_rewritten: &str,
) -> Run {
    let mut items = vec![inner_text(kind, first_rewritten)];
    let mut next = start + 1;
    while next < lines.len() {
        let rewritten = rewrite_inline(&lines[next]);
        if LineKind::classify(&rewritten).run_kind() != Some(kind) {
            break;
        }
        items.push(inner_text(kind, &rewritten));
        next += 1;
    }
    tracing::debug!(kind = ?kind, lines = items.len(), "collected run");

    let fragment = match kind {
        RunKind::UnorderedList => list_fragment("ul", &items),
        RunKind::OrderedList => list_fragment("ol", &items),
        RunKind::Quote => quote_fragment(&items),
        RunKind::Table => table_fragment(&items),
    };
    Run { fragment, next }
}

/// Captured inner content of one run line (marker stripped).
fn inner_text(kind: RunKind, line: &str) -> String {
    let pattern = match kind {
        RunKind::UnorderedList => &UNORDERED_ITEM,
        RunKind::OrderedList => &ORDERED_ITEM,
        RunKind::Quote => &QUOTE_LINE,
        RunKind::Table => &TABLE_ROW,
    };
    pattern
        .captures(line)
        .map(|caps| caps[1].to_owned())
        .unwrap_or_default()
}

/// `<ul>`/`<ol>` with one `<li>` per run line. Ordered lists number
/// implicitly; the source digits were already discarded by the capture.
fn list_fragment(tag: &str, items: &[String]) -> String {
    let mut out = format!("<{tag}>");
    for item in items {
        write!(out, "<li>{item}</li>").unwrap();
    }
    write!(out, "</{tag}>").unwrap();
    out
}

/// `<blockquote>` with a `<br/>` after each quoted line.
fn quote_fragment(items: &[String]) -> String {
    let mut out = String::from("<blockquote>");
    for item in items {
        write!(out, "{item}<br/>").unwrap();
    }
    out.push_str("</blockquote>");
    out
}

/// `<table>` from the run's rows: row 0 is the header (`<th>`), row 1 is
/// the separator and is dropped, the rest are data rows (`<td>`). A short
/// run still renders whatever rows it has.
fn table_fragment(rows: &[String]) -> String {
    let mut out = String::from("<table>");
    for (index, row) in rows.iter().enumerate() {
        if index == 1 {
            continue;
        }
        let tag = if index == 0 { "th" } else { "td" };
        out.push_str("<tr>");
        for cell in row.split('|') {
            write!(out, "<{tag}>{cell}</{tag}>").unwrap();
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}
