//! Percentage scoring of a match result

use crate::processing::matcher::MatchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Percentage in `[0, 100]`, two decimals.
    pub score: f64,
    pub total_keywords: usize,
    pub present_count: usize,
    pub missing_count: usize,
}

/// `present / total` as a percentage rounded to two decimals.
///
/// A `total` of zero is treated as one, which yields 0.
pub fn score(present_count: usize, total_count: usize) -> f64 {
    let total = total_count.max(1) as f64;
    let present = present_count.min(total_count) as f64;
    ((present * 10000.0) / total).round() / 100.0
}

pub fn score_report(result: &MatchResult) -> ScoreReport {
    let present_count = result.present_count();
    let missing_count = result.missing_count();
    let total_keywords = result.total();

    ScoreReport {
        score: score(present_count, total_keywords),
        total_keywords,
        present_count,
        missing_count,
    }
}
