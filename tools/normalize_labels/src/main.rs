use clap::{Parser, ValueEnum};
use formlabels_core::config::{FieldListFormat, PipelineConfig};
use formlabels_core::normalizer::workflow::execute_normalization;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Typescript,
    Json,
}

impl From<Format> for FieldListFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Typescript => FieldListFormat::Typescript,
            Format::Json => FieldListFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "normalize_labels")]
#[command(about = "Canonicalize report candidates and generate the required field list")]
struct Cli {
    /// JSON pipeline config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Candidate report written by extract_labels (patched in place)
    #[arg(long)]
    report: Option<PathBuf>,
    /// Generated field list to (over)write
    #[arg(long)]
    field_list: Option<PathBuf>,
    /// Curated label table (JSON); built-in table when omitted
    #[arg(long)]
    curated_table: Option<PathBuf>,
    /// Ordered repair rules (JSON); built-in rules when omitted
    #[arg(long)]
    repair_rules: Option<PathBuf>,
    /// Output format for the field list
    #[arg(long, value_enum)]
    format: Option<Format>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => match PipelineConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("FAIL: {}", e);
                std::process::exit(1);
            }
        },
        None => PipelineConfig::default(),
    };
    if let Some(report) = cli.report {
        cfg.report_path = report;
    }
    if let Some(field_list) = cli.field_list {
        cfg.field_list_path = field_list;
    }
    if let Some(table) = cli.curated_table {
        cfg.curated_table_path = Some(table);
    }
    if let Some(rules) = cli.repair_rules {
        cfg.repair_rules_path = Some(rules);
    }
    if let Some(format) = cli.format {
        cfg.field_list_format = format.into();
    }

    tracing::debug!(?cfg, "resolved pipeline config");

    match execute_normalization(&cfg) {
        Ok(summary) => {
            println!("OK: candidates read: {}", summary.candidate_count);
            println!("OK: normalized required fields: {}", summary.normalized_count);
            println!("OK: unmapped candidates: {}", summary.unmapped_count);
            println!("OK: updated report: {}", summary.report_path.display());
            println!(
                "OK: wrote field list: {} sha256={}",
                summary.field_list_path.display(),
                summary.field_list_sha256
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            eprintln!("FAIL: {}", e);
            std::process::exit(1);
        }
    }
}
