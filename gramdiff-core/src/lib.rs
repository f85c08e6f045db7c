//! N-Gram Differential-Frequency Engine
//!
//! Scans a labeled news-article corpus (credible vs. dubious) and
//! produces per-term frequency statistics for unigrams, bigrams, and
//! trigrams, split by label cohort. Orders are processed one at a time
//! so peak memory scales with a single order's count matrix; phrases
//! are pruned to those built from already-accepted unigrams.

pub mod corpus;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod pipeline;
pub mod progress;
pub mod row;
pub mod stats;
pub mod writer;

pub use corpus::{load_corpus, Document};
pub use error::PipelineError;
pub use gate::{GatePolicy, Vocabulary};
pub use matrix::{Posting, TermMatrix};
pub use pipeline::{
    generate_ngram_summary, run_from_csv, CancelToken, NgramSummaryConfig, OrderOutcome,
    RunSummary,
};
pub use progress::{NullSink, ProgressSink};
pub use row::TermStat;
pub use writer::SummaryWriter;
