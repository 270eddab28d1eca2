//! Confidence distribution over archetypes.
//!
//! Inverse distance to each archetype's prototype point, with a "gap
//! pressure" correction that pulls toward III and pushes away from the
//! archetype opposite to the leaning side. The coefficients are
//! deliberately asymmetric between CMI-leaning and AMI-leaning profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Archetype;
use crate::domain::foundation::round_to;

/// Pressure added per point of |cmi - ami|.
const GAP_PRESSURE_RATE: f64 = 0.15;

/// Lower bound applied to every adjusted distance.
const MIN_DISTANCE: f64 = 0.1;

/// Added to each distance before inversion.
const DISTANCE_SMOOTHING: f64 = 0.1;

/// AMI above this keeps the CMI-side penalty on II.
const CMI_LEAN_AMI_FLOOR: f64 = 4.5;

/// Probability per archetype; values sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeProbabilities(BTreeMap<Archetype, f64>);

impl TypeProbabilities {
    pub fn get(&self, archetype: Archetype) -> f64 {
        self.0.get(&archetype).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Archetype, f64)> + '_ {
        self.0.iter().map(|(a, p)| (*a, *p))
    }

    /// Archetype with the highest probability; ties resolve to the lower code.
    pub fn most_likely(&self) -> Archetype {
        let mut best = Archetype::DssI;
        let mut best_p = f64::MIN;
        for (archetype, p) in self.iter() {
            if p > best_p {
                best = archetype;
                best_p = p;
            }
        }
        best
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Copy with each value rounded for presentation.
    pub fn rounded(&self, digits: u32) -> Self {
        Self(
            self.0
                .iter()
                .map(|(a, p)| (*a, round_to(*p, digits)))
                .collect(),
        )
    }
}

/// Estimates archetype probabilities for (ami, cmi) at full precision.
pub fn estimate_probabilities(ami: f64, cmi: f64) -> TypeProbabilities {
    let distances = adjusted_distances(ami, cmi);

    let weights: BTreeMap<Archetype, f64> = distances
        .iter()
        .map(|(a, d)| (*a, 1.0 / (d + DISTANCE_SMOOTHING)))
        .collect();
    let total: f64 = weights.values().sum();

    TypeProbabilities(
        weights
            .into_iter()
            .map(|(a, w)| (a, w / total))
            .collect(),
    )
}

fn adjusted_distances(ami: f64, cmi: f64) -> BTreeMap<Archetype, f64> {
    let mut distances: BTreeMap<Archetype, f64> = Archetype::ALL
        .iter()
        .map(|a| {
            let (pa, pc) = a.prototype();
            (*a, ((ami - pa).powi(2) + (cmi - pc).powi(2)).sqrt())
        })
        .collect();

    let gap = cmi - ami;
    let pressure = gap.abs() * GAP_PRESSURE_RATE;

    let shifts: [(Archetype, f64); 4] = if gap > 0.0 {
        let ii_shift = if ami > CMI_LEAN_AMI_FLOOR {
            pressure * 1.5
        } else {
            0.0
        };
        [
            (Archetype::DssI, pressure * 2.0),
            (Archetype::DssII, ii_shift),
            (Archetype::DssIII, -pressure),
            (Archetype::DssIV, pressure),
        ]
    } else if gap < 0.0 {
        [
            (Archetype::DssI, -pressure * 0.5),
            (Archetype::DssII, pressure * 2.0),
            (Archetype::DssIII, -pressure),
            (Archetype::DssIV, pressure),
        ]
    } else {
        [
            (Archetype::DssI, 0.0),
            (Archetype::DssII, 0.0),
            (Archetype::DssIII, 0.0),
            (Archetype::DssIV, 0.0),
        ]
    };

    for (archetype, shift) in shifts {
        if let Some(d) = distances.get_mut(&archetype) {
            *d = (*d + shift).max(MIN_DISTANCE);
        }
    }
    distances
}
