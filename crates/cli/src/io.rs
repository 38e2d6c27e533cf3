//! Reading scorer inputs and writing reports
//!
//! Both input files are JSON Lines. The predictions file holds one JSON string
//! per line; the references file holds one `{"vid": .., "symptoms": [..]}`
//! object per line. Blank lines are ignored, so line `i` of the predictions
//! pairs with the `i`-th reference only when neither file has gaps.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use vsed_core::{OutputConfig, OutputFormat};
use vsed_scorer::{ReferenceRecord, ScoreReport};

fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON on line {} of {}", i + 1, path.display()))
        })
        .collect()
}

/// Reads one prediction string per line
pub fn read_predictions(path: &Path) -> Result<Vec<String>> {
    let predictions: Vec<String> = read_json_lines(path)?;
    tracing::debug!(
        "Read {} predictions from {}",
        predictions.len(),
        path.display()
    );
    Ok(predictions)
}

/// Reads one reference record per line
pub fn read_references(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let references: Vec<ReferenceRecord> = read_json_lines(path)?;
    tracing::debug!(
        "Read {} references from {}",
        references.len(),
        path.display()
    );
    Ok(references)
}

/// Renders a report in the configured format
pub fn render_report(report: &ScoreReport, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => report
            .to_json(output.pretty)
            .context("Failed to serialize score report"),
        OutputFormat::Markdown => Ok(report.to_markdown()),
    }
}

/// Writes `content` to `path`, or to stdout when no path is given
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{content}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
