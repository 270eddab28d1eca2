//! GetAssessmentHandler - Query handler for retrieving an assessment.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving assessments.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<AssessmentSession, DomainError> {
        load_session(self.repository.as_ref(), &query.assessment_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::test_support::{
        fresh_session, MockAssessmentRepository,
    };
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn returns_stored_session() {
        let session = fresh_session();
        let id = *session.id();
        let handler =
            GetAssessmentHandler::new(Arc::new(MockAssessmentRepository::with_session(session)));

        let found = handler
            .handle(GetAssessmentQuery { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(found.id(), &id);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = GetAssessmentHandler::new(Arc::new(MockAssessmentRepository::new()));

        let err = handler
            .handle(GetAssessmentQuery {
                assessment_id: AssessmentId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }
}
