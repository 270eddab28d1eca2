//! Archetype classification over the (AMI, CMI) plane.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A score at or above this is "high".
pub const HIGH_THRESHOLD: f64 = 5.5;

/// Distance from the threshold that still counts as "at the boundary".
pub const BOUNDARY_MARGIN: f64 = 0.5;

/// Gap between the two scores that triggers the dominance rule.
pub const DOMINANCE_THRESHOLD: f64 = 3.0;

/// Discrete classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// AMI-dominant
    #[serde(rename = "DSS-I")]
    DssI,
    /// CMI-dominant
    #[serde(rename = "DSS-II")]
    DssII,
    /// Both dimensions high
    #[serde(rename = "DSS-III")]
    DssIII,
    /// Neither dimension high
    #[serde(rename = "DSS-IV")]
    DssIV,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::DssI,
        Archetype::DssII,
        Archetype::DssIII,
        Archetype::DssIV,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::DssI => "DSS-I",
            Self::DssII => "DSS-II",
            Self::DssIII => "DSS-III",
            Self::DssIV => "DSS-IV",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DssI => "Systematic Analytical",
            Self::DssII => "Creative Conceptual",
            Self::DssIII => "Integrated Polymathic",
            Self::DssIV => "Developing Foundational",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::DssI => "Analytical",
            Self::DssII => "Conceptual",
            Self::DssIII => "Polymathic",
            Self::DssIV => "Foundational",
        }
    }

    /// Hex colour used by charting front-ends.
    pub fn color(&self) -> &'static str {
        match self {
            Self::DssI => "#ef4444",
            Self::DssII => "#8b5cf6",
            Self::DssIII => "#10b981",
            Self::DssIV => "#f59e0b",
        }
    }

    /// Prototype point (ami, cmi) used by the probability estimator.
    pub fn prototype(&self) -> (f64, f64) {
        match self {
            Self::DssI => (8.0, 3.0),
            Self::DssII => (3.0, 8.0),
            Self::DssIII => (8.0, 8.0),
            Self::DssIV => (3.0, 3.0),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classifies age-adjusted scores.
///
/// Rules are evaluated in order; the first match wins:
///
/// 1. both high -> III
/// 2. both low and neither at the boundary -> IV
/// 3. gap >= 3: dominant side's type, or III if the dominant side is high
///    and the weaker side is within the margin below the threshold
/// 4. exactly one high -> I or II
/// 5. one at the boundary and the other high -> III
/// 6. otherwise IV
pub fn classify(ami: f64, cmi: f64) -> Archetype {
    let archetype = decide(ami, cmi);
    debug!(ami, cmi, archetype = %archetype, "Profile classified");
    archetype
}

fn decide(ami: f64, cmi: f64) -> Archetype {
    let ami_high = ami >= HIGH_THRESHOLD;
    let cmi_high = cmi >= HIGH_THRESHOLD;
    let ami_at_boundary = (ami - HIGH_THRESHOLD).abs() <= BOUNDARY_MARGIN;
    let cmi_at_boundary = (cmi - HIGH_THRESHOLD).abs() <= BOUNDARY_MARGIN;
    let near_high = HIGH_THRESHOLD - BOUNDARY_MARGIN;

    if ami_high && cmi_high {
        return Archetype::DssIII;
    }
    if !ami_high && !cmi_high && !ami_at_boundary && !cmi_at_boundary {
        return Archetype::DssIV;
    }

    if (ami - cmi).abs() >= DOMINANCE_THRESHOLD {
        return if cmi > ami {
            if cmi_high && ami >= near_high {
                Archetype::DssIII
            } else {
                Archetype::DssII
            }
        } else if ami_high && cmi >= near_high {
            Archetype::DssIII
        } else {
            Archetype::DssI
        };
    }

    if ami_high && !cmi_high {
        return Archetype::DssI;
    }
    if !ami_high && cmi_high {
        return Archetype::DssII;
    }

    if (ami_at_boundary && cmi_high) || (cmi_at_boundary && ami_high) {
        return Archetype::DssIII;
    }

    Archetype::DssIV
}
