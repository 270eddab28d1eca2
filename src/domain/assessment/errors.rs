//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::QuestionId;

/// Rejected assessment interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Question {0} is not part of this assessment")]
    UnknownQuestion(QuestionId),

    #[error("Question {question_id} has no option {option_index}")]
    OptionOutOfRange {
        question_id: QuestionId,
        option_index: usize,
    },

    #[error("Question {0} has not been answered")]
    Unanswered(QuestionId),

    #[error("Assessment is already completed")]
    AlreadyCompleted,

    #[error("Question bank is empty")]
    EmptyBank,
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::UnknownQuestion(_) => ErrorCode::QuestionNotFound,
            AssessmentError::OptionOutOfRange { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Unanswered(_) => ErrorCode::QuestionUnanswered,
            AssessmentError::AlreadyCompleted => ErrorCode::AssessmentCompleted,
            AssessmentError::EmptyBank => ErrorCode::QuestionBankEmpty,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AssessmentError::UnknownQuestion(id) | AssessmentError::Unanswered(id) => {
                domain.with_detail("question_id", id.to_string())
            }
            AssessmentError::OptionOutOfRange {
                question_id,
                option_index,
            } => domain
                .with_detail("question_id", question_id.to_string())
                .with_detail("option_index", option_index.to_string()),
            _ => domain,
        }
    }
}
