//! Staged N-Gram Pipeline
//!
//! Runs the n-gram orders in ascending sequence: order 1 must finish
//! and commit its vocabulary before orders 2 and 3 consult it. Within
//! an order, per-term aggregation fans out over rayon; the collect is
//! index-stable so row order follows term discovery order. Each
//! order's matrix and row buffer are dropped before the next order
//! starts, so peak memory scales with one order's data.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gramdiff_text::{NgramTokenizer, UnigramNormalizer};

use crate::corpus::{load_corpus, Document};
use crate::error::PipelineError;
use crate::gate::{GatePolicy, Vocabulary};
use crate::matrix::TermMatrix;
use crate::progress::ProgressSink;
use crate::row::TermStat;
use crate::stats::cohort_stats;
use crate::writer::SummaryWriter;

/// Configuration for one summary-generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgramSummaryConfig {
    /// Corpus column holding the article text.
    pub text_column: String,
    /// Corpus column holding the binary credibility label.
    pub label_column: String,
    /// Output artifact path.
    pub output_path: PathBuf,
    /// Inclusive n-gram order range.
    pub ngram_range: (usize, usize),
    /// Minimum combined occurrence count for a term to survive.
    pub min_count_threshold: u64,
    /// Constituent-word rule for phrase survival.
    pub gate_policy: GatePolicy,
}

impl Default for NgramSummaryConfig {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
            label_column: "label".to_string(),
            output_path: PathBuf::from("ngram_summary.csv"),
            ngram_range: (1, 3),
            min_count_threshold: 100,
            gate_policy: GatePolicy::All,
        }
    }
}

/// Cooperative cancellation flag, checked once per order boundary.
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Row count contributed by one n-gram order.
#[derive(Debug, Clone, Copy)]
pub struct OrderOutcome {
    pub order: usize,
    pub rows: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub orders: Vec<OrderOutcome>,
    pub total_rows: usize,
}

/// Load a corpus CSV and generate the summary artifact.
///
/// Input errors surface before the output file is touched.
pub fn run_from_csv(
    input: &Path,
    config: &NgramSummaryConfig,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<RunSummary, PipelineError> {
    let documents = load_corpus(input, &config.text_column, &config.label_column, progress)?;
    generate_ngram_summary(&documents, config, progress, cancel)
}

/// Generate the n-gram summary artifact for an in-memory corpus.
pub fn generate_ngram_summary(
    documents: &[Document],
    config: &NgramSummaryConfig,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<RunSummary, PipelineError> {
    let (lo, hi) = config.ngram_range;
    if lo == 0 || lo > hi {
        return Err(PipelineError::InvalidRange { lo, hi });
    }

    let labels: Vec<bool> = documents.iter().map(|d| d.credible).collect();
    let mut writer = SummaryWriter::create(&config.output_path)?;
    let mut vocabulary = Vocabulary::new();
    let mut orders = Vec::new();

    for order in lo..=hi {
        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled { order });
        }

        progress.status(&format!("Processing {order}-grams..."));
        let matrix = build_matrix(documents, order);
        debug!(order, terms = matrix.term_count(), "matrix built");

        let rows = aggregate_order(
            &matrix,
            &labels,
            order,
            config.min_count_threshold,
            config.gate_policy,
            &vocabulary,
        );

        if order == 1 {
            // Acceptance at order 1 is what admits a word to the
            // vocabulary consulted by orders 2 and 3.
            vocabulary = Vocabulary::from_terms(rows.iter().map(|r| r.term.clone()));
            debug!(words = vocabulary.len(), "vocabulary committed");
        }

        if rows.is_empty() {
            progress.status(&format!("No {order}-grams met the threshold."));
        } else {
            writer.append(&rows)?;
            progress.status(&format!(
                "Appended {} {order}-grams to {}",
                rows.len(),
                config.output_path.display()
            ));
        }
        orders.push(OrderOutcome {
            order,
            rows: rows.len(),
        });
        // Matrix and row buffer drop here, before the next order.
    }

    let total_rows = orders.iter().map(|o| o.rows).sum();
    info!(total_rows, path = %config.output_path.display(), "run complete");
    progress.status(&format!(
        "All n-grams saved to {}",
        config.output_path.display()
    ));
    Ok(RunSummary { orders, total_rows })
}

/// Build one order's count matrix. Order 1 counts over the lemmatized,
/// stop-word-filtered token string; higher orders window over raw text
/// so phrases keep their surface form.
fn build_matrix(documents: &[Document], order: usize) -> TermMatrix {
    let tokenizer = NgramTokenizer::new(order);
    if order == 1 {
        let normalizer = UnigramNormalizer::default();
        TermMatrix::from_token_streams(
            documents
                .iter()
                .map(|d| tokenizer.ngrams(&normalizer.normalize(&d.text))),
        )
    } else {
        TermMatrix::from_token_streams(documents.iter().map(|d| tokenizer.ngrams(&d.text)))
    }
}

/// Threshold-filter, gate, and aggregate one order's terms. Parallel
/// across terms; the indexed collect preserves term order.
fn aggregate_order(
    matrix: &TermMatrix,
    labels: &[bool],
    order: usize,
    min_count_threshold: u64,
    gate_policy: GatePolicy,
    vocabulary: &Vocabulary,
) -> Vec<TermStat> {
    (0..matrix.term_count())
        .into_par_iter()
        .filter_map(|idx| {
            let term = &matrix.terms()[idx];

            let mut real_counts = Vec::new();
            let mut dubious_counts = Vec::new();
            for posting in matrix.postings(idx) {
                if labels[posting.doc as usize] {
                    real_counts.push(posting.count);
                } else {
                    dubious_counts.push(posting.count);
                }
            }

            let count_real: u64 = real_counts.iter().map(|&c| u64::from(c)).sum();
            let count_dubious: u64 = dubious_counts.iter().map(|&c| u64::from(c)).sum();
            if count_real + count_dubious < min_count_threshold {
                return None;
            }
            if order > 1 && !vocabulary.admits(gate_policy, term) {
                return None;
            }

            Some(TermStat::new(
                term.clone(),
                order,
                count_real,
                count_dubious,
                cohort_stats(&real_counts),
                cohort_stats(&dubious_counts),
            ))
        })
        .collect()
}
