//! Whole-line classification.
//!
//! Every line belongs to exactly one block construct. Classification is
//! attempted in a fixed priority order and the first matching pattern wins,
//! so overlapping pattern classes (a `***` rule line vs. a `*` list marker,
//! a fence line vs. inline code) resolve the same way everywhere.

use std::sync::LazyLock;

use regex::Regex;

/// Start fence: exactly three backticks plus a language tag.
pub(crate) static FENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w+)$").unwrap());
/// End fence: exactly three backticks, nothing else.
pub(crate) static FENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```$").unwrap());
/// 1-6 leading `#` markers; a seventh breaks the match so the line falls
/// through as plain text with the literal markers kept.
pub(crate) static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})([^#].*)?$").unwrap());
/// Whole-line image: `![alt](url)`, anchored at both ends.
pub(crate) static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)$").unwrap());
/// Exactly three of one rule character.
pub(crate) static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*{3}|-{3}|_{3})$").unwrap());
/// List bullet, a space, then the item text.
pub(crate) static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+*] (.*)$").unwrap());
/// Digits, a dot, a space, then the item text. The digits are discarded on
/// output; numbering is implicit.
pub(crate) static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. (.*)$").unwrap());
/// `>` with an optional space; the quoted text may be empty.
pub(crate) static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> ?(.*)$").unwrap());
/// A row starts and ends with `|`; the inner text splits on `|` into cells.
pub(crate) static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(.*)\|$").unwrap());

/// Block classification of one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Opening fence of a code block (language tag required).
    FenceStart,
    /// Closing fence of a code block.
    FenceEnd,
    /// Heading with 1-6 markers.
    Heading,
    /// Whole-line image.
    Image,
    /// Horizontal rule.
    Rule,
    /// Unordered list item.
    UnorderedItem,
    /// Ordered list item.
    OrderedItem,
    /// Block quote line.
    QuoteLine,
    /// Table row.
    TableRow,
    /// Anything else.
    Paragraph,
}

/// The multi-line constructs a run can be made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RunKind {
    UnorderedList,
    OrderedList,
    Quote,
    Table,
}

impl LineKind {
    /// Classify a line, first match wins.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if FENCE_START.is_match(line) {
            Self::FenceStart
        } else if FENCE_END.is_match(line) {
            Self::FenceEnd
        } else if HEADING.is_match(line) {
            Self::Heading
        } else if IMAGE.is_match(line) {
            Self::Image
        } else if HORIZONTAL_RULE.is_match(line) {
            Self::Rule
        } else if UNORDERED_ITEM.is_match(line) {
            Self::UnorderedItem
        } else if ORDERED_ITEM.is_match(line) {
            Self::OrderedItem
        } else if QUOTE_LINE.is_match(line) {
            Self::QuoteLine
        } else if TABLE_ROW.is_match(line) {
            Self::TableRow
        } else {
            Self::Paragraph
        }
    }

    /// The run kind this line can contribute to, if any.
    pub(crate) fn run_kind(self) -> Option<RunKind> {
        match self {
            Self::UnorderedItem => Some(RunKind::UnorderedList),
            Self::OrderedItem => Some(RunKind::OrderedList),
            Self::QuoteLine => Some(RunKind::Quote),
            Self::TableRow => Some(RunKind::Table),
            _ => None,
        }
    }
}

/// Language tag of a start-fence line, if the line is one.
pub(crate) fn fence_language(line: &str) -> Option<&str> {
    FENCE_START
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|tag| tag.as_str())
}
