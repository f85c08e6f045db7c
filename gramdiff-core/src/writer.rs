//! Streaming Summary Writer
//!
//! Appends one order's surviving rows at a time to the single output
//! artifact. The artifact is recreated empty at the start of a run;
//! the header is written exactly once, on the first non-empty append;
//! every append is flushed before the next order begins.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PipelineError;
use crate::row::TermStat;

/// Append-only CSV sink for the n-gram summary artifact.
#[derive(Debug)]
pub struct SummaryWriter {
    path: PathBuf,
    header_written: bool,
}

impl SummaryWriter {
    /// Delete any previous artifact and create it empty. Re-running
    /// the pipeline regenerates the file wholesale, never merges.
    pub fn create(path: &Path) -> Result<Self, PipelineError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            header_written: false,
        })
    }

    /// Append one order's rows, whole rows only, and flush.
    pub fn append(&mut self, rows: &[TermStat]) -> Result<(), PipelineError> {
        if rows.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(!self.header_written)
            .from_writer(file);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        self.header_written = true;

        debug!(rows = rows.len(), path = %self.path.display(), "appended rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::cohort_stats;

    fn row(term: &str, n: usize) -> TermStat {
        TermStat::new(
            term.to_string(),
            n,
            2,
            0,
            cohort_stats(&[1, 1]),
            cohort_stats(&[]),
        )
    }

    #[test]
    fn test_header_written_once_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let mut writer = SummaryWriter::create(&path).unwrap();
        writer.append(&[row("economy", 1)]).unwrap();
        writer.append(&[]).unwrap();
        writer.append(&[row("economy shock", 2)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("term,ngram_size,is_phrase,"));
        assert!(lines[1].starts_with("economy,1,false,"));
        assert!(lines[2].starts_with("economy shock,2,true,"));
    }

    #[test]
    fn test_create_truncates_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        std::fs::write(&path, "stale contents\n").unwrap();

        let _writer = SummaryWriter::create(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_empty_append_creates_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let mut writer = SummaryWriter::create(&path).unwrap();
        writer.append(&[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
