//! Profile assembly: merges every engine output into one record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::domain::assessment::{Answer, QuestionTiming};
use crate::domain::foundation::round_to;
use crate::domain::questionnaire::{Dimension, Question, QuestionId};
use crate::domain::scoring::{
    adjusted_score, age_adjustment, aggregate, classify, estimate_probabilities, likelihood,
    Archetype, MarkerScores, TypeProbabilities,
};

use super::summary::summarize;

/// Decimal places for presented dimension scores.
const SCORE_DIGITS: u32 = 2;

/// Decimal places for presented probabilities.
const PROBABILITY_DIGITS: u32 = 4;

/// Per-dimension age deltas; present only when an age was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeAdjustmentDetail {
    pub age: u32,
    pub ami: f64,
    pub cmi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLikelihood {
    pub ami: f64,
    pub cmi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub total_ms: u64,
    pub avg_per_question_ms: u64,
    pub questions: BTreeMap<QuestionId, QuestionTiming>,
}

impl TimingSummary {
    pub fn from_timings(timings: &HashMap<QuestionId, QuestionTiming>) -> Self {
        let total_ms: u64 = timings.values().map(|t| t.duration_ms).sum();
        let avg_per_question_ms = if timings.is_empty() {
            0
        } else {
            (total_ms as f64 / timings.len() as f64).round() as u64
        };
        Self {
            total_ms,
            avg_per_question_ms,
            questions: timings.iter().map(|(id, t)| (*id, *t)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerBreakdown {
    pub ami: MarkerScores,
    pub cmi: MarkerScores,
}

/// Terminal result of one completed assessment.
///
/// Scores are presented to 2 decimals and probabilities to 4; the
/// archetype and summary are derived from the unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub ami: f64,
    pub cmi: f64,
    pub ami_raw: f64,
    pub cmi_raw: f64,
    pub age_adjustment: Option<AgeAdjustmentDetail>,
    pub archetype: Archetype,
    pub summary: String,
    pub likelihood: DimensionLikelihood,
    pub type_probabilities: TypeProbabilities,
    pub timing: TimingSummary,
    pub markers: MarkerBreakdown,
}

impl Profile {
    /// Presented (rounded, age-adjusted) score for a dimension.
    pub fn score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Ami => self.ami,
            Dimension::Cmi => self.cmi,
        }
    }

    /// CMI minus AMI on presented scores.
    pub fn delta(&self) -> f64 {
        self.cmi - self.ami
    }
}

/// Everything collected during a session that the profile needs.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInput<'a> {
    pub age: Option<u32>,
    pub questions: &'a [Question],
    pub answers: &'a HashMap<QuestionId, Answer>,
    pub timings: &'a HashMap<QuestionId, QuestionTiming>,
}

/// Runs the engine end to end and assembles the profile.
pub fn assemble_profile(input: ProfileInput<'_>) -> Profile {
    let scores = aggregate(input.answers, input.questions);

    let ami_adjustment = age_adjustment(input.age, Dimension::Ami);
    let cmi_adjustment = age_adjustment(input.age, Dimension::Cmi);
    let ami = adjusted_score(scores.ami_raw, ami_adjustment);
    let cmi = adjusted_score(scores.cmi_raw, cmi_adjustment);

    let archetype = classify(ami, cmi);
    let probabilities = estimate_probabilities(ami, cmi);

    let age_adjustment = input.age.map(|age| AgeAdjustmentDetail {
        age,
        ami: round_to(ami_adjustment, SCORE_DIGITS),
        cmi: round_to(cmi_adjustment, SCORE_DIGITS),
    });

    let profile = Profile {
        ami: round_to(ami, SCORE_DIGITS),
        cmi: round_to(cmi, SCORE_DIGITS),
        ami_raw: round_to(scores.ami_raw, SCORE_DIGITS),
        cmi_raw: round_to(scores.cmi_raw, SCORE_DIGITS),
        age_adjustment,
        archetype,
        summary: summarize(ami, cmi, archetype),
        likelihood: DimensionLikelihood {
            ami: likelihood(&scores.marker_values(Dimension::Ami)),
            cmi: likelihood(&scores.marker_values(Dimension::Cmi)),
        },
        type_probabilities: probabilities.rounded(PROBABILITY_DIGITS),
        timing: TimingSummary::from_timings(input.timings),
        markers: MarkerBreakdown {
            ami: scores.ami_markers,
            cmi: scores.cmi_markers,
        },
    };

    debug!(
        ami = profile.ami,
        cmi = profile.cmi,
        archetype = %profile.archetype,
        "Profile assembled"
    );
    profile
}
