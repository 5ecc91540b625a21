use crate::error::{LabelError, LabelResult};
use crate::extractor::render::CANDIDATE_HEADING;
use regex::Regex;
use std::sync::LazyLock;

// Heading, blank line, then one or more bullet lines.
static RE_CANDIDATE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}\r?\n\r?\n(?P<body>(?:- .+\r?\n)+)",
        regex::escape(CANDIDATE_HEADING)
    ))
    .expect("valid candidate section regex")
});

/// Pulls the raw candidate bullets out of an extractor report.
pub fn read_report_candidates(md: &str) -> LabelResult<Vec<String>> {
    let caps = RE_CANDIDATE_SECTION.captures(md).ok_or_else(|| {
        LabelError::MalformedReport(format!(
            "could not find '{}' section with at least one bullet",
            CANDIDATE_HEADING.trim_start_matches("## ")
        ))
    })?;

    let labels = caps["body"]
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|label| label.trim().to_string())
        .collect();
    Ok(labels)
}
