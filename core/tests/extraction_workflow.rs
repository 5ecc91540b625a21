use formlabels_core::config::PipelineConfig;
use formlabels_core::error::LabelError;
use formlabels_core::extractor::noise::is_noise;
use formlabels_core::extractor::workflow::execute_extraction;
use formlabels_core::normalizer::parser::read_report_candidates;
use std::path::Path;

const DUMP: &str = include_str!("fixtures/owner_surrender_dump.txt");

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        source_path: dir.join("dump.txt"),
        report_path: dir.join("out").join("report.md"),
        field_list_path: dir.join("out").join("field-map.ts"),
        ..PipelineConfig::default()
    }
}

#[test]
fn extraction_writes_candidate_report() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    std::fs::write(&cfg.source_path, DUMP).unwrap();

    let summary = execute_extraction(&cfg).unwrap();
    assert_eq!(summary.total_lines, 28);
    assert_eq!(summary.candidate_count, 9);

    let md = std::fs::read_to_string(&cfg.report_path).unwrap();
    assert_eq!(summary.report_bytes, md.len());
    assert!(md.contains("Total lines scanned: `28`"));
    assert!(md.contains("Required candidates found (deduped): `9`"));

    let candidates = read_report_candidates(&md).unwrap();
    assert_eq!(
        candidates,
        vec![
            "Owner's Name *",
            "Owner's E-mail *",
            "Owner's Preferred Contact Number *",
            "Gender * Male Female",
            "Dog's Weight *",
            "its stomach tacked? *",
            "Veterinarian's name (to obtain vet records) *",
            "Veterinary office phone number *",
            "Favourite squeaky toy *",
        ]
    );
    assert!(candidates.iter().all(|c| !is_noise(c)));
    assert!(md.contains("- `owner-s-preferred-contact-number`  ←  Owner's Preferred Contact Number *"));
}

#[test]
fn extraction_is_repeatable() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    std::fs::write(&cfg.source_path, DUMP).unwrap();

    execute_extraction(&cfg).unwrap();
    let first = std::fs::read(&cfg.report_path).unwrap();
    execute_extraction(&cfg).unwrap();
    let second = std::fs::read(&cfg.report_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_source_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());

    let err = execute_extraction(&cfg).unwrap_err();
    assert!(matches!(err, LabelError::MissingSource { .. }));
    assert!(!cfg.report_path.exists());
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    std::fs::write(&cfg.source_path, b"\nDog\xe9s Weight *\n").unwrap();

    let summary = execute_extraction(&cfg).unwrap();
    assert_eq!(summary.candidate_count, 1);
    let md = std::fs::read_to_string(&cfg.report_path).unwrap();
    assert!(md.contains("- Dog\u{fffd}s Weight *"));
}
