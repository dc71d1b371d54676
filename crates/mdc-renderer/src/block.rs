//! Single-line block fragments.
//!
//! Builders for constructs that consume one whole line and produce one
//! element: headings, images, horizontal rules. The engine calls these with
//! the inline-rewritten line after [`LineKind`](crate::line::LineKind)
//! classification, so the patterns are guaranteed to match; a miss falls
//! back to the line itself.

use crate::line::{HEADING, IMAGE};

/// `<hN>rest</hN>` with N = number of `#` markers (1-6 by construction).
///
/// Leading whitespace after the markers is trimmed: `# A` becomes
/// `<h1>A</h1>`.
pub(crate) fn heading_fragment(line: &str) -> String {
    let Some(caps) = HEADING.captures(line) else {
        return line.to_owned();
    };
    let level = caps[1].len();
    let rest = caps.get(2).map_or("", |rest| rest.as_str().trim_start());
    format!("<h{level}>{rest}</h{level}>")
}

/// `<img src="url" alt="alt" />` from a whole-line `![alt](url)`.
pub(crate) fn image_fragment(line: &str) -> String {
    let Some(caps) = IMAGE.captures(line) else {
        return line.to_owned();
    };
    format!(r#"<img src="{}" alt="{}" />"#, &caps[2], &caps[1])
}

/// The horizontal rule element.
pub(crate) fn rule_fragment() -> String {
    "<hr/>".to_owned()
}
