//! RecordAnswerHandler - Command handler for selecting an option.

use std::sync::Arc;

use tracing::warn;

use super::load_session;
use crate::domain::assessment::{Answer, AssessmentSession};
use crate::domain::foundation::{AssessmentId, DomainError, Timestamp};
use crate::domain::questionnaire::QuestionId;
use crate::ports::AssessmentRepository;

/// Command to record the chosen option for one question.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub assessment_id: AssessmentId,
    pub question_id: QuestionId,
    pub option_index: usize,
}

#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    pub session: AssessmentSession,
    pub answer: Answer,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl RecordAnswerHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, DomainError> {
        let mut session = load_session(self.repository.as_ref(), &cmd.assessment_id).await?;

        let answer = session
            .select_option(cmd.question_id, cmd.option_index, Timestamp::now())
            .map(Answer::clone)
            .map_err(|err| {
                warn!(
                    assessment_id = %cmd.assessment_id,
                    question_id = cmd.question_id,
                    option_index = cmd.option_index,
                    error = %err,
                    "Answer rejected"
                );
                err
            })?;

        self.repository.save(&session).await?;

        Ok(RecordAnswerResult { session, answer })
    }
}
