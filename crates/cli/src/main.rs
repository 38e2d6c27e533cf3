//! vsed CLI - vaccine side-effect extraction scoring
//!
//! This binary scores model-generated symptom lists against gold annotations.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vsed::io::{read_predictions, read_references, render_report, write_output};
use vsed_core::config::Config;
use vsed_core::{Lexicon, OutputFormat, Vocabulary};
use vsed_scorer::Scorer;

#[derive(Parser)]
#[command(name = "vsed")]
#[command(about = "Score vaccine side-effect symptom extraction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score predictions against reference annotations
    Score {
        /// JSON Lines file with one prediction string per line
        #[arg(short, long, value_name = "FILE")]
        predictions: PathBuf,

        /// JSON Lines file with one {"vid", "symptoms"} record per line
        #[arg(short, long, value_name = "FILE")]
        references: PathBuf,

        /// Report format (overrides the configured one)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show the size of each loaded vocabulary
    Lexicon,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Score {
            predictions,
            references,
            format,
            output,
        } => score(
            config,
            &predictions,
            &references,
            format,
            output.as_deref(),
        ),
        Commands::Lexicon => show_lexicon(&config),
    }
}

/// Initialize logging system
///
/// Logs go to stderr so stdout only carries the report. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vsed={level},vsed_core={level},vsed_scorer={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    Ok(())
}

fn score(
    mut config: Config,
    predictions_path: &Path,
    references_path: &Path,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(format) = format {
        config.output.format = format;
    }

    let lexicon = Lexicon::load(&config.lexicon).context("Failed to load lexicon")?;
    let predictions = read_predictions(predictions_path)?;
    let references = read_references(references_path)?;

    let report = Scorer::new(&lexicon)
        .compute(&predictions, &references)
        .context("Scoring failed")?;

    let rendered = render_report(&report, &config.output)?;
    write_output(&rendered, output)?;

    if let Some(path) = output {
        info!("Wrote score report to {}", path.display());
    }
    Ok(())
}

fn show_lexicon(config: &Config) -> Result<()> {
    let lexicon = Lexicon::load(&config.lexicon).context("Failed to load lexicon")?;

    for vocabulary in Vocabulary::ALL {
        println!(
            "{vocabulary}\t{}\t{}",
            lexicon.len(vocabulary),
            config.lexicon.path_for(vocabulary).display()
        );
    }
    Ok(())
}
