use super::noise::is_noise;
use crate::text::{char_len, clean_label, has_required_marker, split_lines};
use std::collections::HashSet;
use tracing::debug;

/// Marker lines longer than this are prose that happens to contain `*`.
pub const MAX_MARKER_LINE_CHARS: usize = 120;
/// A wrapped first half is never longer than this.
pub const MAX_CONTINUATION_CHARS: usize = 40;
/// A marker line this long already carries its whole label.
pub const MAX_JOINABLE_LINE_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub total_lines: usize,
    /// Cleaned, noise-free, deduplicated, in order of first appearance.
    pub candidates: Vec<String>,
}

pub fn scan_candidates(text: &str) -> ScanOutcome {
    let lines = split_lines(text);
    let mut found = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !has_required_marker(line) {
            continue;
        }
        let cur = line.trim();
        if char_len(cur) > MAX_MARKER_LINE_CHARS {
            debug!(line = idx + 1, "skipping overlong marker line");
            continue;
        }

        let prev = if idx > 0 { lines[idx - 1] } else { "" };
        if is_continuation(prev, cur) {
            let joined = format!("{} {}", prev.trim(), cur);
            debug!(line = idx + 1, joined = %joined, "joined wrapped label");
            found.push(clean_label(&joined));
        } else {
            found.push(clean_label(cur));
        }
    }

    ScanOutcome {
        total_lines: lines.len(),
        candidates: dedup_candidates(found),
    }
}

/// Whether `prev` looks like the first half of a label that the text dump
/// wrapped onto `cur`.
pub fn is_continuation(prev: &str, cur: &str) -> bool {
    let p = prev.trim();
    if is_noise(p) || p.ends_with(':') || p.ends_with('?') {
        return false;
    }
    char_len(p) <= MAX_CONTINUATION_CHARS && char_len(cur.trim()) <= MAX_JOINABLE_LINE_CHARS
}

/// Drops noise and repeats; first occurrence keeps its position.
pub fn dedup_candidates<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for c in candidates {
        if is_noise(&c) {
            continue;
        }
        if seen.insert(c.clone()) {
            out.push(c);
        }
    }
    out
}
