//! Reduces per-question answers to one raw score per dimension.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::assessment::Answer;
use crate::domain::questionnaire::{Dimension, Marker, Question, QuestionId};

/// Marker -> score in [0,1] for one dimension.
pub type MarkerScores = BTreeMap<Marker, f64>;

/// Raw (pre-adjustment) dimension scores on the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateScores {
    pub ami_raw: f64,
    pub cmi_raw: f64,
    pub ami_markers: MarkerScores,
    pub cmi_markers: MarkerScores,
}

impl AggregateScores {
    pub fn raw(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Ami => self.ami_raw,
            Dimension::Cmi => self.cmi_raw,
        }
    }

    pub fn markers(&self, dimension: Dimension) -> &MarkerScores {
        match dimension {
            Dimension::Ami => &self.ami_markers,
            Dimension::Cmi => &self.cmi_markers,
        }
    }

    /// The individual marker scores of a dimension, in marker order.
    pub fn marker_values(&self, dimension: Dimension) -> Vec<f64> {
        self.markers(dimension).values().copied().collect()
    }
}

/// Buckets answered scores by marker and averages each dimension.
///
/// Unanswered questions are skipped. A dimension with no answered markers
/// scores 0. Each mean is scaled by 10.
pub fn aggregate(answers: &HashMap<QuestionId, Answer>, questions: &[Question]) -> AggregateScores {
    let mut ami_markers = MarkerScores::new();
    let mut cmi_markers = MarkerScores::new();

    for question in questions {
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };
        let bucket = match question.dimension {
            Dimension::Ami => &mut ami_markers,
            Dimension::Cmi => &mut cmi_markers,
        };
        bucket.insert(question.marker.clone(), answer.score);
    }

    AggregateScores {
        ami_raw: scaled_mean(&ami_markers),
        cmi_raw: scaled_mean(&cmi_markers),
        ami_markers,
        cmi_markers,
    }
}

fn scaled_mean(markers: &MarkerScores) -> f64 {
    if markers.is_empty() {
        return 0.0;
    }
    let sum: f64 = markers.values().sum();
    sum / markers.len() as f64 * 10.0
}
