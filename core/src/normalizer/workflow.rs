use super::canonicalize::canonicalize;
use super::curated::CuratedTable;
use super::field_list::render_field_list;
use super::model::Canonicalized;
use super::parser::read_report_candidates;
use super::render::{patch_report, render_normalized_section, MAX_UNMAPPED_LISTED};
use super::repairs::RepairRules;
use crate::config::PipelineConfig;
use crate::determinism::digest::sha256_hex;
use crate::error::LabelResult;
use crate::storage::files::{read_text, write_atomic};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizationSummary {
    pub candidate_count: usize,
    pub normalized_count: usize,
    pub unmapped_count: usize,
    pub report_path: PathBuf,
    pub field_list_path: PathBuf,
    pub field_list_sha256: String,
}

/// Everything the normalizer will write, computed before anything is written.
#[derive(Debug, Clone)]
pub struct NormalizationOutput {
    pub candidates: Vec<String>,
    pub result: Canonicalized,
    pub report: String,
    pub field_list: String,
}

/// Pure part of the run: report text in, patched report and field list out.
pub fn build_normalization_output(
    report_md: &str,
    cfg: &PipelineConfig,
    rules: &RepairRules,
    table: &CuratedTable,
) -> LabelResult<NormalizationOutput> {
    let candidates = read_report_candidates(report_md)?;
    let result = canonicalize(&candidates, rules, table);

    let section = render_normalized_section(&result);
    let report = patch_report(report_md, &section);
    let field_list = render_field_list(&result.normalized, cfg, &table.table_version)?;

    Ok(NormalizationOutput {
        candidates,
        result,
        report,
        field_list,
    })
}

/// Report → patched report + generated field list. Tables and the report are
/// all read and validated before either output is touched.
pub fn execute_normalization(cfg: &PipelineConfig) -> LabelResult<NormalizationSummary> {
    cfg.validate()?;
    let rules = RepairRules::load_or_default(cfg.repair_rules_path.as_deref())?;
    let table = CuratedTable::load_or_default(cfg.curated_table_path.as_deref())?;
    info!(
        rules = rules.rules.len(),
        rules_version = %rules.rules_version,
        entries = table.len(),
        table_version = %table.table_version,
        "loaded normalization tables"
    );

    let md = read_text(&cfg.report_path)?;
    let out = build_normalization_output(&md, cfg, &rules, &table)?;
    if out.result.unmapped.len() > MAX_UNMAPPED_LISTED {
        warn!(
            unmapped = out.result.unmapped.len(),
            listed = MAX_UNMAPPED_LISTED,
            "review list truncated in report"
        );
    }

    write_atomic(&cfg.report_path, out.report.as_bytes())?;
    write_atomic(&cfg.field_list_path, out.field_list.as_bytes())?;
    info!(
        report = %cfg.report_path.display(),
        field_list = %cfg.field_list_path.display(),
        normalized = out.result.normalized.len(),
        unmapped = out.result.unmapped.len(),
        "wrote normalized outputs"
    );

    Ok(NormalizationSummary {
        candidate_count: out.candidates.len(),
        normalized_count: out.result.normalized.len(),
        unmapped_count: out.result.unmapped.len(),
        report_path: cfg.report_path.clone(),
        field_list_path: cfg.field_list_path.clone(),
        field_list_sha256: sha256_hex(out.field_list.as_bytes()),
    })
}
