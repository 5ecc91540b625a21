//! Label text primitives shared by the extractor and the normalizer.

use regex::Regex;
use std::sync::LazyLock;

/// Character that flags a form field as mandatory.
pub const REQUIRED_MARKER: char = '*';

// Marker, whitespace, "ex:", whitespace, rest of line.
static RE_INLINE_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\s+ex:\s+.*$").expect("valid inline example regex"));

// Vertical tab, form feed, file/group/record separators, NEL and the Unicode
// line/paragraph separators all end a line; \r\n counts once.
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c\x1d\x1e\x{85}\x{2028}\x{2029}]")
        .expect("valid line break regex")
});

/// Splits on every line terminator a text dump may carry (lone `\r`, form
/// feed, Unicode separators). A terminator at the very end does not open an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = RE_LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `Owner's E-mail * ex: myname@example.com` becomes `Owner's E-mail *`.
pub fn strip_inline_example(s: &str) -> String {
    RE_INLINE_EXAMPLE.replace(s, "*").into_owned()
}

/// Squash plus inline example removal; the form every candidate is kept in.
pub fn clean_label(s: &str) -> String {
    strip_inline_example(&squash_whitespace(s))
}

/// Display text for a label: marker removed, whitespace squashed.
pub fn strip_required_marker(s: &str) -> String {
    squash_whitespace(&s.replace(REQUIRED_MARKER, ""))
}

pub fn has_required_marker(s: &str) -> bool {
    s.contains(REQUIRED_MARKER)
}

/// Length in characters, as a reader would count them.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
