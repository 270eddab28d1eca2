//! Consistency-and-strength statistic over a dimension's marker scores.

use crate::domain::foundation::round_to;

/// Returned when a dimension has no marker scores.
pub const NEUTRAL_LIKELIHOOD: f64 = 0.5;

const CONSISTENCY_WEIGHT: f64 = 0.6;
const STRENGTH_WEIGHT: f64 = 0.4;

/// 0.6 x consistency + 0.4 x mean, rounded to 4 decimals.
///
/// Consistency is `max(0, 1 - 2 * population std-dev)`, so consistently
/// strong markers score higher than erratically strong ones.
pub fn likelihood(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return NEUTRAL_LIKELIHOOD;
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let consistency = (1.0 - 2.0 * std_dev).max(0.0);
    let strength = mean;

    round_to(
        consistency * CONSISTENCY_WEIGHT + strength * STRENGTH_WEIGHT,
        4,
    )
}
