//! Per-Cohort Statistics
//!
//! Summary statistics over the documents where a term actually occurs.
//! Length-0 and length-1 inputs take explicit branches so the engine
//! never produces NaN or relies on a library's sample-variance
//! convention.

/// Max, mean, and population standard deviation over one cohort's
/// positive occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortStats {
    pub max: u64,
    pub mean: f64,
    pub stdev: f64,
}

/// Compute cohort statistics over positive occurrence counts.
///
/// Zero qualifying documents: all statistics are 0. Exactly one: the
/// mean is that document's count and the stdev is 0.
pub fn cohort_stats(counts: &[u32]) -> CohortStats {
    match counts {
        [] => CohortStats {
            max: 0,
            mean: 0.0,
            stdev: 0.0,
        },
        [only] => CohortStats {
            max: u64::from(*only),
            mean: f64::from(*only),
            stdev: 0.0,
        },
        _ => {
            let n = counts.len() as f64;
            let max = counts.iter().copied().max().unwrap_or(0);
            let sum: u64 = counts.iter().map(|&c| u64::from(c)).sum();
            let mean = sum as f64 / n;
            let variance = counts
                .iter()
                .map(|&c| {
                    let diff = f64::from(c) - mean;
                    diff * diff
                })
                .sum::<f64>()
                / n;
            CohortStats {
                max: u64::from(max),
                mean,
                stdev: variance.sqrt(),
            }
        }
    }
}

/// Normalized cohort imbalance: |real - dubious| / total, 0.0 when the
/// total is 0 so the rule degrades instead of dividing by zero.
pub fn relevance_score(count_real: u64, count_dubious: u64) -> f64 {
    let total = count_real + count_dubious;
    if total == 0 {
        return 0.0;
    }
    count_real.abs_diff(count_dubious) as f64 / total as f64
}

/// Round to four decimal places for output stability.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cohort_is_all_zero() {
        let stats = cohort_stats(&[]);
        assert_eq!(stats, CohortStats { max: 0, mean: 0.0, stdev: 0.0 });
    }

    #[test]
    fn test_single_document_cohort() {
        let stats = cohort_stats(&[3]);
        assert_eq!(stats.max, 3);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.stdev, 0.0);
    }

    #[test]
    fn test_population_stdev() {
        // Counts 2 and 4: mean 3, population variance 1.
        let stats = cohort_stats(&[2, 4]);
        assert_eq!(stats.max, 4);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.stdev, 1.0);
    }

    #[test]
    fn test_relevance_score_bounds() {
        assert_eq!(relevance_score(0, 0), 0.0);
        assert_eq!(relevance_score(5, 5), 0.0);
        assert_eq!(relevance_score(3, 0), 1.0);
        let score = relevance_score(2, 1);
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(2.0), 2.0);
    }
}
