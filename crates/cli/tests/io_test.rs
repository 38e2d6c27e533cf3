//! Tests for reading scorer inputs and rendering reports

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use vsed::io::{read_predictions, read_references, render_report, write_output};
use vsed_core::{OutputConfig, OutputFormat, PerVocabulary};
use vsed_scorer::{ReferenceRecord, ScoreReport, VocabularyScores};

fn sample_report() -> ScoreReport {
    ScoreReport::new(PerVocabulary::from_fn(|_| VocabularyScores {
        n_target_doc: 2,
        micro_recall: 0.25,
        ..VocabularyScores::default()
    }))
}

#[test]
fn test_read_predictions_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.jsonl");
    fs::write(&path, "\"fever, rash\"\n\n\"Headache\"\n").unwrap();

    let predictions = read_predictions(&path).unwrap();
    assert_eq!(predictions, vec!["fever, rash", "Headache"]);
}

#[test]
fn test_read_predictions_reports_bad_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.jsonl");
    fs::write(&path, "\"fever\"\nfever, rash\n").unwrap();

    let err = read_predictions(&path).unwrap_err();
    assert!(format!("{err}").contains("line 2"), "{err}");
}

#[test]
fn test_read_references() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("references.jsonl");
    fs::write(
        &path,
        "{\"vid\": 916600, \"symptoms\": [\"fever\", \"chills\"]}\n\
         {\"vid\": 916601, \"symptoms\": []}\n",
    )
    .unwrap();

    let references = read_references(&path).unwrap();
    assert_eq!(
        references,
        vec![
            ReferenceRecord::new(916600, ["fever", "chills"]),
            ReferenceRecord::new(916601, Vec::<String>::new()),
        ]
    );
}

#[test]
fn test_read_references_missing_file() {
    let err = read_references(std::path::Path::new("/nonexistent/refs.jsonl")).unwrap_err();
    assert!(format!("{err}").contains("Failed to read"));
}

#[test]
fn test_render_report_json() {
    let output = OutputConfig {
        format: OutputFormat::Json,
        pretty: false,
    };
    let rendered = render_report(&sample_report(), &output).unwrap();

    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["cui"]["n_target_doc"], 2);
    assert_eq!(json["longtail"]["micro_recall"], 0.25);
    assert!(!rendered.contains('\n'));
}

#[test]
fn test_render_report_markdown() {
    let output = OutputConfig {
        format: OutputFormat::Markdown,
        pretty: true,
    };
    let rendered = render_report(&sample_report(), &output).unwrap();
    assert!(rendered.starts_with("| Vocabulary |"));
    assert!(rendered.contains("| cui | 2 |"));
}

#[test]
fn test_write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    write_output("{}", Some(&path)).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
}
