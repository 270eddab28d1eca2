//! DeleteAssessmentHandler - Command handler for discarding a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

/// Command to drop an assessment, finished or not.
#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub assessment_id: AssessmentId,
}

pub struct DeleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl DeleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAssessmentCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.assessment_id).await?;
        info!(assessment_id = %cmd.assessment_id, "Assessment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::test_support::{
        fully_answered_session, MockAssessmentRepository,
    };
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn removes_stored_session() {
        let mut session = fully_answered_session();
        session.complete().unwrap();
        let id = *session.id();
        let repo = Arc::new(MockAssessmentRepository::with_session(session));
        let handler = DeleteAssessmentHandler::new(repo.clone());

        handler
            .handle(DeleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert!(repo.stored(&id).is_none());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = DeleteAssessmentHandler::new(Arc::new(MockAssessmentRepository::new()));

        let err = handler
            .handle(DeleteAssessmentCommand {
                assessment_id: AssessmentId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }
}
