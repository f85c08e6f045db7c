use std::path::PathBuf;

/// Errors that terminate a pipeline run.
///
/// Per-document anomalies never surface here; they degrade to zero
/// terms and are reported through the progress sink instead.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read corpus {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("corpus is missing required column `{0}`")]
    MissingColumn(String),

    #[error("invalid n-gram range {lo}..={hi}")]
    InvalidRange { lo: usize, hi: usize },

    #[error("failed to write output: {0}")]
    Output(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("run cancelled before the {order}-gram stage")]
    Cancelled { order: usize },
}
