//! JSON file adapter for the question bank.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::questionnaire::{QuestionBank, QuestionBankFile};
use crate::ports::{QuestionBankSource, QuestionBankSourceError};

/// Loads a bank from a `{ "questions": [...] }` JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileQuestionBank {
    path: PathBuf,
}

impl JsonFileQuestionBank {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionBankSource for JsonFileQuestionBank {
    async fn load(&self) -> Result<QuestionBank, QuestionBankSourceError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuestionBankSourceError::NotFound(self.path.display().to_string())
            } else {
                QuestionBankSourceError::Io(format!("{}: {}", self.path.display(), e))
            }
        })?;

        let file: QuestionBankFile = serde_json::from_str(&raw)
            .map_err(|e| QuestionBankSourceError::Malformed(e.to_string()))?;
        let bank = QuestionBank::try_from(file)?;

        info!(
            path = %self.path.display(),
            markers = bank.marker_count(),
            questions = bank.question_count(),
            "Question bank loaded"
        );
        Ok(bank)
    }
}
