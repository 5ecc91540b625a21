use super::model::Canonicalized;
use regex::Regex;
use std::sync::LazyLock;

pub const NORMALIZED_HEADING: &str = "## Normalized required labels (canonicalized)";
pub const UNMAPPED_HEADING: &str = "### Unmapped / needs review";
/// Review list cap; the rest is summarized in one line.
pub const MAX_UNMAPPED_LISTED: usize = 60;

// The heading only counts on a line of its own, never inside a bullet.
static RE_NORMALIZED_HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^{}\r?$", regex::escape(NORMALIZED_HEADING)))
        .expect("valid normalized heading regex")
});

pub fn render_normalized_section(result: &Canonicalized) -> String {
    let mut out = Vec::new();
    out.push("---".to_string());
    out.push("".to_string());
    out.push(NORMALIZED_HEADING.to_string());
    out.push("".to_string());
    for item in &result.normalized {
        out.push(format!("- `{}` — {}", item.key, item.label));
    }
    out.push("".to_string());
    out.push("".to_string());
    out.push(UNMAPPED_HEADING.to_string());
    out.push("".to_string());
    if result.unmapped.is_empty() {
        out.push("- (none)".to_string());
    } else {
        for u in result.unmapped.iter().take(MAX_UNMAPPED_LISTED) {
            out.push(format!("- raw: `{}` → normalized: `{}`", u.raw, u.normalized));
        }
        if result.unmapped.len() > MAX_UNMAPPED_LISTED {
            out.push(format!(
                "- …and {} more",
                result.unmapped.len() - MAX_UNMAPPED_LISTED
            ));
        }
    }
    out.push("".to_string());
    out.join("\n")
}

/// Appends `section`, or replaces everything from an earlier normalized
/// heading (and the separator in front of it) to the end of the document.
/// Patching an already patched report with the same section is a no-op.
pub fn patch_report(md: &str, section: &str) -> String {
    let base = match RE_NORMALIZED_HEADING_LINE.find(md) {
        Some(m) => {
            let head = md[..m.start()].trim_end();
            head.strip_suffix("---").unwrap_or(head)
        }
        None => md,
    };
    format!("{}\n\n{}", base.trim_end(), section)
}
