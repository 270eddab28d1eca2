//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::DomainError;
use crate::domain::profile::ProfileReport;
use crate::domain::questionnaire::{Dimension, Question, QuestionId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Age as sent by a client: a number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

impl AgeInput {
    /// Raw text handed to the lenient age parser.
    pub fn into_raw(self) -> String {
        match self {
            AgeInput::Number(n) => n.to_string(),
            AgeInput::Text(s) => s,
        }
    }
}

/// Request to start an assessment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartAssessmentRequest {
    #[serde(default)]
    pub age: Option<AgeInput>,
}

/// Request to record an answer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_id: QuestionId,
    pub option_index: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub index: usize,
    pub text: String,
}

/// A question as shown to the respondent; option scores are withheld.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub marker: String,
    pub marker_label: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub options: Vec<OptionResponse>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            dimension: question.dimension,
            marker: question.marker.as_str().to_string(),
            marker_label: question.marker.label().to_string(),
            text: question.text.clone(),
            context: question.context.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| OptionResponse {
                    index,
                    text: option.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    InProgress,
    Completed,
}

/// Assessment state for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub status: AssessmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub current_index: usize,
    pub total_questions: usize,
    pub answered_count: usize,
    pub progress: f64,
    pub can_go_back: bool,
    pub can_advance: bool,
    pub is_last: bool,
    pub current_question: QuestionResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProfileReport>,
}

impl From<&AssessmentSession> for AssessmentResponse {
    fn from(session: &AssessmentSession) -> Self {
        let question = session.current_question();
        let selected_option = session.answer(question.id).map(|a| a.option_index);
        let status = if session.is_complete() {
            AssessmentStatus::Completed
        } else {
            AssessmentStatus::InProgress
        };

        Self {
            id: session.id().to_string(),
            status,
            age: session.age(),
            current_index: session.current_index(),
            total_questions: session.total_questions(),
            answered_count: session.answered_count(),
            progress: session.progress(),
            can_go_back: !session.is_first() && !session.is_complete(),
            can_advance: selected_option.is_some() && !session.is_complete(),
            is_last: session.is_last(),
            current_question: question.into(),
            selected_option,
            report: session
                .profile()
                .map(|profile| ProfileReport::from_profile(profile.clone())),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| {
            serde_json::Value::Object(
                err.details
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::String(v)))
                    .collect(),
            )
        });
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
