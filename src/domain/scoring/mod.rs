//! Scoring module - the profiling engine.
//!
//! Pure, synchronous functions over already-collected answers:
//!
//! - `aggregator` - per-marker answers to raw 0-10 dimension scores
//! - `age_adjustment` - additive per-dimension handicap by age band
//! - `classifier` - ordered decision table yielding one `Archetype`
//! - `probability` - inverse-distance confidence over all archetypes
//! - `likelihood` - consistency-weighted strength per dimension

mod age_adjustment;
mod aggregator;
mod classifier;
mod likelihood;
mod probability;

pub use age_adjustment::{
    adjusted_score, age_adjustment, curve_for, parse_age, AgeBand, AgeCurve, AMI_CURVE,
    CMI_CURVE, MAX_SCORE, MIN_ADJUSTED_AGE,
};
pub use aggregator::{aggregate, AggregateScores, MarkerScores};
pub use classifier::{classify, Archetype, BOUNDARY_MARGIN, DOMINANCE_THRESHOLD, HIGH_THRESHOLD};
pub use likelihood::{likelihood, NEUTRAL_LIKELIHOOD};
pub use probability::{estimate_probabilities, TypeProbabilities};
