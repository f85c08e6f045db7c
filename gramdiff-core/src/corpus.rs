//! Corpus Loading
//!
//! Reads the labeled article corpus from CSV. An unreadable file or a
//! missing required column is fatal; a row whose label cannot be parsed
//! is skipped with a warning and contributes no terms.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::progress::ProgressSink;

/// One corpus document. Identified implicitly by position.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    /// True for the credible cohort (label 1), false for dubious (0).
    pub credible: bool,
}

/// Load documents from a CSV corpus with the given text and label
/// column names. Missing or empty text cells become empty strings.
pub fn load_corpus(
    path: &Path,
    text_column: &str,
    label_column: &str,
    progress: &dyn ProgressSink,
) -> Result<Vec<Document>, PipelineError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| PipelineError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| PipelineError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let text_idx = headers
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| PipelineError::MissingColumn(text_column.to_string()))?;
    let label_idx = headers
        .iter()
        .position(|h| h == label_column)
        .ok_or_else(|| PipelineError::MissingColumn(label_column.to_string()))?;

    let mut documents = Vec::new();
    for (row, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|source| PipelineError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;

        // Undecodable text is a per-document anomaly: the document
        // stays in its cohort but contributes no terms.
        let text = match record.get(text_idx) {
            None => String::new(),
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    warn!(row, "undecodable text; document contributes no terms");
                    progress.status(&format!(
                        "Row {row}: text is not valid UTF-8, treating as empty"
                    ));
                    String::new()
                }
            },
        };

        let label = record.get(label_idx).map(String::from_utf8_lossy);
        match label.as_deref().and_then(parse_label) {
            Some(credible) => documents.push(Document { text, credible }),
            None => {
                warn!(row, "skipping row with unparseable label");
                progress.status(&format!(
                    "Skipping row {row}: label is not a binary 0/1 value"
                ));
            }
        }
    }

    debug!(documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Parse a binary label cell: 1 = credible, 0 = dubious.
fn parse_label(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" => Some(true),
        "0" => Some(false),
        other => match other.parse::<f64>() {
            Ok(v) if v == 1.0 => Some(true),
            Ok(v) if v == 0.0 => Some(false),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_accepts_integer_and_float_forms() {
        assert_eq!(parse_label("1"), Some(true));
        assert_eq!(parse_label("0"), Some(false));
        assert_eq!(parse_label(" 1.0 "), Some(true));
        assert_eq!(parse_label("0.0"), Some(false));
    }

    #[test]
    fn test_parse_label_rejects_everything_else() {
        assert_eq!(parse_label("2"), None);
        assert_eq!(parse_label("credible"), None);
        assert_eq!(parse_label(""), None);
    }
}
