use super::scan::ScanOutcome;
use crate::text::REQUIRED_MARKER;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Heading the normalizer looks for; both stages must agree on it.
pub const CANDIDATE_HEADING: &str = "## Candidate labels (as extracted)";

const SLUG_MAX_CHARS: usize = 80;

static RE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()\[\]]").expect("valid bracket regex"));
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Advisory slug shown next to each candidate. Nothing downstream reads it.
pub fn suggest_key(label: &str) -> String {
    let base = label.replace(REQUIRED_MARKER, "").trim().to_lowercase();
    let base = RE_BRACKETS.replace_all(&base, "");
    let base = RE_NON_ALNUM.replace_all(&base, "-");
    base.trim_matches('-').chars().take(SLUG_MAX_CHARS).collect()
}

pub fn render_candidate_report(form_title: &str, source: &Path, scan: &ScanOutcome) -> String {
    let mut out = Vec::new();
    out.push(format!("# {} — Required Label Candidates", form_title));
    out.push("".to_string());
    out.push(format!("Source: `{}`", source.display()));
    out.push("".to_string());
    out.push(format!("Total lines scanned: `{}`", scan.total_lines));
    out.push("".to_string());
    out.push(format!(
        "Required candidates found (deduped): `{}`",
        scan.candidates.len()
    ));
    out.push("".to_string());
    out.push("".to_string());
    out.push("---".to_string());
    out.push("".to_string());
    out.push(CANDIDATE_HEADING.to_string());
    out.push("".to_string());
    for label in &scan.candidates {
        out.push(format!("- {}", label));
    }
    out.push("".to_string());
    out.push("---".to_string());
    out.push("".to_string());
    out.push("## Suggested canonical keys (heuristic)".to_string());
    out.push("".to_string());
    out.push(
        "> These keys are **NOT authoritative**. They are a starting point for the canonical field list."
            .to_string(),
    );
    out.push("".to_string());
    for label in &scan.candidates {
        out.push(format!("- `{}`  ←  {}", suggest_key(label), label));
    }
    out.push("".to_string());
    out.join("\n")
}
