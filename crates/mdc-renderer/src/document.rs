//! Document assembly.
//!
//! Wraps the ordered fragment sequence in the fixed HTML shell. The shell
//! is a constant, not configuration: a UTF-8 charset declaration and a
//! placeholder title.

/// Opening boilerplate, up to and including `<body>`.
const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Title</title>
</head>
<body>"#;

/// Closing boilerplate.
const HTML_FOOTER: &str = "</body>\n</html>";

/// Join the fragments, in production order, between the fixed header and
/// footer. Pure string concatenation; fragments are never reordered or
/// validated.
#[must_use]
pub fn assemble(fragments: &[String]) -> String {
    let content_len: usize = fragments.iter().map(|fragment| fragment.len() + 1).sum();
    let mut out = String::with_capacity(HTML_HEADER.len() + content_len + HTML_FOOTER.len() + 1);
    out.push_str(HTML_HEADER);
    out.push('\n');
    for fragment in fragments {
        out.push_str(fragment);
        out.push('\n');
    }
    out.push_str(HTML_FOOTER);
    out
}
