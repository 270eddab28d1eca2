//! Per-question answer and timing records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::{Dimension, Marker, Question};

/// The option chosen for one question, with its derived score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub option_index: usize,
    pub score: f64,
    pub dimension: Dimension,
    pub marker: Marker,
}

impl Answer {
    /// Builds the answer for `option_index` of `question`.
    ///
    /// Returns `None` if the question has no such option.
    pub fn for_option(question: &Question, option_index: usize) -> Option<Self> {
        question.option(option_index).map(|option| Self {
            option_index,
            score: option.score,
            dimension: question.dimension,
            marker: question.marker.clone(),
        })
    }
}

/// Time spent before the first selection on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTiming {
    pub start: Timestamp,
    pub end: Timestamp,
    pub duration_ms: u64,
}

impl QuestionTiming {
    pub fn between(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end,
            duration_ms: end.millis_since(&start),
        }
    }
}
