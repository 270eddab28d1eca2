//! Age-based additive adjustment per dimension.
//!
//! AMI is processing-dependent and declines sooner and more steeply;
//! CMI keeps a longer peak window and a shallower decline.

use serde::Serialize;

use crate::domain::questionnaire::Dimension;

/// Ages below this never receive an adjustment.
pub const MIN_ADJUSTED_AGE: u32 = 12;

/// Upper bound of any dimension score.
pub const MAX_SCORE: f64 = 10.0;

/// Inclusive age range with its additive adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeBand {
    pub min_age: u32,
    pub max_age: u32,
    pub adjustment: f64,
}

impl AgeBand {
    const fn new(min_age: u32, max_age: u32, adjustment: f64) -> Self {
        Self {
            min_age,
            max_age,
            adjustment,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Ordered, disjoint, ascending bands for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeCurve {
    pub dimension: Dimension,
    pub bands: &'static [AgeBand],
}

const AMI_BANDS: [AgeBand; 5] = [
    AgeBand::new(0, 24, 0.30),
    AgeBand::new(25, 44, 0.00),
    AgeBand::new(45, 54, 0.40),
    AgeBand::new(55, 64, 0.80),
    AgeBand::new(65, 100, 1.20),
];

const CMI_BANDS: [AgeBand; 4] = [
    AgeBand::new(0, 24, 0.15),
    AgeBand::new(25, 49, 0.00),
    AgeBand::new(50, 59, 0.20),
    AgeBand::new(60, 100, 0.40),
];

pub const AMI_CURVE: AgeCurve = AgeCurve {
    dimension: Dimension::Ami,
    bands: &AMI_BANDS,
};

pub const CMI_CURVE: AgeCurve = AgeCurve {
    dimension: Dimension::Cmi,
    bands: &CMI_BANDS,
};

/// Returns the configured curve for a dimension.
pub fn curve_for(dimension: Dimension) -> &'static AgeCurve {
    match dimension {
        Dimension::Ami => &AMI_CURVE,
        Dimension::Cmi => &CMI_CURVE,
    }
}

impl AgeCurve {
    /// Adjustment of the first band containing `age`, or 0 beyond the table.
    pub fn adjustment_for(&self, age: u32) -> f64 {
        self.bands
            .iter()
            .find(|band| band.contains(age))
            .map(|band| band.adjustment)
            .unwrap_or(0.0)
    }
}

/// Additive adjustment for `age` on `dimension`.
///
/// Absent age or age under 12 yields 0.
pub fn age_adjustment(age: Option<u32>, dimension: Dimension) -> f64 {
    match age {
        Some(age) if age >= MIN_ADJUSTED_AGE => curve_for(dimension).adjustment_for(age),
        _ => 0.0,
    }
}

/// Raw score plus adjustment, capped at 10.
pub fn adjusted_score(raw: f64, adjustment: f64) -> f64 {
    (raw + adjustment).min(MAX_SCORE)
}

/// Leniently parses free-text age input.
///
/// Leading whitespace is skipped and the leading run of digits is used
/// (`"42 years"` -> 42). Anything else is treated as "no age".
pub fn parse_age(input: &str) -> Option<u32> {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
