//! Projection of dimension scores onto an IQ-style range, with growth outlook.

use serde::Serialize;

use super::AgeAdjustmentDetail;
use crate::domain::questionnaire::Dimension;

/// Bottom of the projected scale (score 0).
pub const IQ_FLOOR: i64 = 85;

/// Top of the projected scale (score 10).
pub const IQ_CEILING: i64 = 175;

/// Share of remaining headroom considered reachable.
pub const GROWTH_FACTOR: f64 = 0.7;

/// |delta| within which both dimensions count as balanced for growth.
const BALANCED_DELTA: f64 = 1.0;

/// |delta| at or above which a single development vector is reported.
const FOCUSED_DELTA: f64 = 2.0;

/// Maps a 0-10 score linearly onto 85-175.
pub fn map_to_iq(score: f64) -> i64 {
    round_half_up(IQ_FLOOR as f64 + score / 10.0 * (IQ_CEILING - IQ_FLOOR) as f64)
}

/// Reachable extra score per dimension; `None` where growth isn't projected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPotential {
    pub ami: Option<f64>,
    pub cmi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DevelopmentVector {
    /// One dimension clearly trails; develop it.
    Focused {
        dimension: Dimension,
        current: f64,
        target: f64,
        iq_gain: i64,
        projected_nominal: i64,
    },
    /// Neither dimension clearly trails.
    Balanced { iq_gain: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CognitiveRange {
    pub ami_iq: i64,
    pub cmi_iq: i64,
    pub floor: i64,
    pub ceiling: i64,
    pub nominal: i64,
    pub bandwidth: i64,
    /// Points of the nominal value attributable to age adjustment.
    pub age_attributable: i64,
    pub growth: GrowthPotential,
    pub development: DevelopmentVector,
}

/// Projects the (adjusted) scores onto the IQ-style scale.
pub fn cognitive_range(
    ami: f64,
    cmi: f64,
    age_adjustment: Option<&AgeAdjustmentDetail>,
) -> CognitiveRange {
    let ami_iq = map_to_iq(ami);
    let cmi_iq = map_to_iq(cmi);
    let floor = ami_iq.min(cmi_iq);
    let ceiling = ami_iq.max(cmi_iq);
    let nominal = midpoint(ami_iq, cmi_iq);

    let age_attributable = match age_adjustment {
        Some(adj) if adj.ami > 0.0 || adj.cmi > 0.0 => {
            let raw_nominal = midpoint(map_to_iq(ami - adj.ami), map_to_iq(cmi - adj.cmi));
            nominal - raw_nominal
        }
        _ => 0,
    };

    let delta = cmi - ami;
    let ami_headroom = (10.0 - ami) * GROWTH_FACTOR;
    let cmi_headroom = (10.0 - cmi) * GROWTH_FACTOR;
    let ami_gain = map_to_iq(ami + ami_headroom) - ami_iq;
    let cmi_gain = map_to_iq(cmi + cmi_headroom) - cmi_iq;

    let (growth, iq_gain) = if delta.abs() <= BALANCED_DELTA {
        (
            GrowthPotential {
                ami: Some(ami_headroom),
                cmi: Some(cmi_headroom),
            },
            midpoint(ami_gain, cmi_gain),
        )
    } else if delta > 0.0 {
        (
            GrowthPotential {
                ami: Some(ami_headroom),
                cmi: None,
            },
            ami_gain,
        )
    } else {
        (
            GrowthPotential {
                ami: None,
                cmi: Some(cmi_headroom),
            },
            cmi_gain,
        )
    };

    let development = if delta.abs() >= FOCUSED_DELTA {
        if delta > 0.0 {
            DevelopmentVector::Focused {
                dimension: Dimension::Ami,
                current: ami,
                target: ami + ami_headroom,
                iq_gain,
                projected_nominal: midpoint(map_to_iq((ami + ami_headroom).min(10.0)), cmi_iq),
            }
        } else {
            DevelopmentVector::Focused {
                dimension: Dimension::Cmi,
                current: cmi,
                target: cmi + cmi_headroom,
                iq_gain,
                projected_nominal: midpoint(ami_iq, map_to_iq((cmi + cmi_headroom).min(10.0))),
            }
        }
    } else {
        DevelopmentVector::Balanced { iq_gain }
    };

    CognitiveRange {
        ami_iq,
        cmi_iq,
        floor,
        ceiling,
        nominal,
        bandwidth: ceiling - floor,
        age_attributable,
        growth,
        development,
    }
}

fn midpoint(a: i64, b: i64) -> i64 {
    round_half_up((a + b) as f64 / 2.0)
}

/// Halves round toward positive infinity, so -1.5 becomes -1.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
