//! Question and option value types.

use serde::{Deserialize, Serialize};

use super::{Dimension, Marker};

/// Identifier of a question within a bank; also the tie-break sort key.
pub type QuestionId = u32;

/// One selectable answer with its score in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub score: f64,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Immutable multiple-choice item measuring one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub marker: Marker,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Returns the option at `index`, if any.
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }
}
