use clap::Parser;
use formlabels_core::config::PipelineConfig;
use formlabels_core::extractor::workflow::execute_extraction;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extract_labels")]
#[command(about = "Scan a form text dump for required labels and write a candidate report")]
struct Cli {
    /// JSON pipeline config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Plain-text dump of the form
    #[arg(long)]
    source: Option<PathBuf>,
    /// Markdown report to (over)write
    #[arg(long)]
    report: Option<PathBuf>,
    /// Form name used in the report title
    #[arg(long)]
    form_title: Option<String>,
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
    if let Some(source) = cli.source {
        cfg.source_path = source;
    }
    if let Some(report) = cli.report {
        cfg.report_path = report;
    }
    if let Some(title) = cli.form_title {
        cfg.form_title = title;
    }

    tracing::debug!(?cfg, "resolved pipeline config");

    match execute_extraction(&cfg) {
        Ok(summary) => {
            println!(
                "OK: wrote {} ({} bytes)",
                summary.report_path.display(),
                summary.report_bytes
            );
            println!("OK: lines scanned: {}", summary.total_lines);
            println!("OK: required candidates (deduped): {}", summary.candidate_count);
        }
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            eprintln!("FAIL: {}", e);
            std::process::exit(1);
        }
    }
}
