//! Gramdiff CLI
//!
//! Loads a labeled article corpus from CSV, runs the n-gram
//! differential-frequency pipeline, and writes the summary artifact.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::info;

use gramdiff_core::{run_from_csv, CancelToken, GatePolicy, NgramSummaryConfig};

#[derive(Debug, Parser)]
#[command(
    name = "gramdiff",
    about = "N-gram differential-frequency summary generator for labeled news corpora"
)]
struct Cli {
    /// Path to the corpus CSV
    #[arg(long, env = "GRAMDIFF_INPUT")]
    input: PathBuf,

    /// Column holding the article text
    #[arg(long, default_value = "text")]
    text_column: String,

    /// Column holding the binary credibility label (1 = credible)
    #[arg(long, default_value = "label")]
    label_column: String,

    /// Output artifact path
    #[arg(long, default_value = "ngram_summary.csv")]
    output: PathBuf,

    /// Lowest n-gram order (inclusive)
    #[arg(long, default_value_t = 1)]
    min_ngram: usize,

    /// Highest n-gram order (inclusive)
    #[arg(long, default_value_t = 3)]
    max_ngram: usize,

    /// Minimum combined occurrence count for a term to survive
    #[arg(long, default_value_t = 100)]
    min_count: u64,

    /// Phrase survival rule over constituent words: all | any
    #[arg(long, default_value = "all")]
    gate_policy: GatePolicy,
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.min_ngram == 0 || cli.min_ngram > cli.max_ngram {
        bail!(
            "invalid n-gram range {}..={}",
            cli.min_ngram,
            cli.max_ngram
        );
    }

    let config = NgramSummaryConfig {
        text_column: cli.text_column,
        label_column: cli.label_column,
        output_path: cli.output,
        ngram_range: (cli.min_ngram, cli.max_ngram),
        min_count_threshold: cli.min_count,
        gate_policy: cli.gate_policy,
    };

    let progress = |message: &str| eprintln!("{message}");
    let cancel = CancelToken::new();
    let summary = run_from_csv(&cli.input, &config, &progress, &cancel)?;

    for outcome in &summary.orders {
        info!(order = outcome.order, rows = outcome.rows, "order complete");
    }
    info!(total_rows = summary.total_rows, "summary generated");
    Ok(())
}
