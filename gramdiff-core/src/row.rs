//! Output Row
//!
//! One surviving term's statistics. Field order matches the output
//! artifact's column order exactly.

use serde::Serialize;

use crate::stats::{relevance_score, round4, CohortStats};

/// One row of the n-gram summary artifact.
#[derive(Debug, Clone, Serialize)]
pub struct TermStat {
    pub term: String,
    pub ngram_size: usize,
    pub is_phrase: bool,

    pub count_real: u64,
    pub count_dubious: u64,
    pub total_count: u64,

    pub in_real: bool,
    pub in_dubious: bool,

    pub max_real: u64,
    pub mean_real: f64,
    pub stdev_real: f64,

    pub max_dubious: u64,
    pub mean_dubious: f64,
    pub stdev_dubious: f64,

    pub relevance_score: f64,
}

impl TermStat {
    /// Assemble a row from cohort totals and per-occurrence statistics.
    pub fn new(
        term: String,
        ngram_size: usize,
        count_real: u64,
        count_dubious: u64,
        real: CohortStats,
        dubious: CohortStats,
    ) -> Self {
        Self {
            term,
            ngram_size,
            is_phrase: ngram_size > 1,
            count_real,
            count_dubious,
            total_count: count_real + count_dubious,
            in_real: count_real > 0,
            in_dubious: count_dubious > 0,
            max_real: real.max,
            mean_real: round4(real.mean),
            stdev_real: round4(real.stdev),
            max_dubious: dubious.max,
            mean_dubious: round4(dubious.mean),
            stdev_dubious: round4(dubious.stdev),
            relevance_score: relevance_score(count_real, count_dubious),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::cohort_stats;

    #[test]
    fn test_total_is_sum_of_cohorts() {
        let row = TermStat::new(
            "economy".into(),
            1,
            2,
            1,
            cohort_stats(&[1, 1]),
            cohort_stats(&[1]),
        );
        assert_eq!(row.total_count, 3);
        assert!(!row.is_phrase);
        assert!(row.in_real);
        assert!(row.in_dubious);
        assert!((row.relevance_score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_absent_cohort_flags() {
        let row = TermStat::new(
            "economy shock".into(),
            2,
            4,
            0,
            cohort_stats(&[2, 2]),
            cohort_stats(&[]),
        );
        assert!(row.is_phrase);
        assert!(row.in_real);
        assert!(!row.in_dubious);
        assert_eq!(row.max_dubious, 0);
        assert_eq!(row.relevance_score, 1.0);
    }
}
