use super::render::render_candidate_report;
use super::scan::scan_candidates;
use crate::config::PipelineConfig;
use crate::error::LabelResult;
use crate::storage::files::{read_text_lossy, write_atomic};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub report_path: PathBuf,
    pub total_lines: usize,
    pub candidate_count: usize,
    pub report_bytes: usize,
}

/// Source dump → candidate report. The report is overwritten as a whole.
pub fn execute_extraction(cfg: &PipelineConfig) -> LabelResult<ExtractionSummary> {
    cfg.validate()?;
    let text = read_text_lossy(&cfg.source_path)?;
    let scan = scan_candidates(&text);
    info!(
        source = %cfg.source_path.display(),
        lines = scan.total_lines,
        candidates = scan.candidates.len(),
        "scanned source for required labels"
    );

    let report = render_candidate_report(&cfg.form_title, &cfg.source_path, &scan);
    write_atomic(&cfg.report_path, report.as_bytes())?;
    info!(report = %cfg.report_path.display(), bytes = report.len(), "wrote candidate report");

    Ok(ExtractionSummary {
        report_path: cfg.report_path.clone(),
        total_lines: scan.total_lines,
        candidate_count: scan.candidates.len(),
        report_bytes: report.len(),
    })
}
