//! QuestionBankSource port for loading the question bank.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::{QuestionBank, QuestionBankError};

/// Errors that can occur while loading a bank.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuestionBankSourceError {
    /// Bank document not found.
    #[error("Question bank not found: {0}")]
    NotFound(String),

    /// Underlying read failed.
    #[error("Failed to read question bank: {0}")]
    Io(String),

    /// Document is not a valid bank file.
    #[error("Malformed question bank: {0}")]
    Malformed(String),

    /// Document parsed but violates bank invariants.
    #[error("Invalid question bank: {0}")]
    Invalid(#[from] QuestionBankError),
}

impl From<QuestionBankSourceError> for DomainError {
    fn from(err: QuestionBankSourceError) -> Self {
        let code = match &err {
            QuestionBankSourceError::Invalid(QuestionBankError::Empty) => {
                ErrorCode::QuestionBankEmpty
            }
            QuestionBankSourceError::Invalid(_) | QuestionBankSourceError::Malformed(_) => {
                ErrorCode::QuestionBankInvalid
            }
            QuestionBankSourceError::NotFound(_) | QuestionBankSourceError::Io(_) => {
                ErrorCode::StorageError
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Source of the validated question bank.
///
/// Loading happens once, before any assessment is started.
#[async_trait]
pub trait QuestionBankSource: Send + Sync {
    async fn load(&self) -> Result<QuestionBank, QuestionBankSourceError>;
}
