//! CompleteAssessmentHandler - Command handler for scoring a finished run.

use std::sync::Arc;

use tracing::info;

use super::load_session;
use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::profile::ProfileReport;
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub assessment_id: AssessmentId,
}

#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub session: AssessmentSession,
    pub report: ProfileReport,
}

/// Handler for completing assessments.
pub struct CompleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl CompleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, DomainError> {
        let mut session = load_session(self.repository.as_ref(), &cmd.assessment_id).await?;

        let profile = session.complete()?.clone();
        self.repository.save(&session).await?;

        info!(
            assessment_id = %cmd.assessment_id,
            archetype = %profile.archetype,
            ami = profile.ami,
            cmi = profile.cmi,
            "Profile ready"
        );

        Ok(CompleteAssessmentResult {
            session,
            report: ProfileReport::from_profile(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::test_support::{
        fresh_session, fully_answered_session, MockAssessmentRepository,
    };
    use crate::domain::foundation::ErrorCode;
    use crate::domain::scoring::Archetype;

    #[tokio::test]
    async fn completes_and_builds_report() {
        let session = fully_answered_session();
        let id = *session.id();
        let repo = Arc::new(MockAssessmentRepository::with_session(session));
        let handler = CompleteAssessmentHandler::new(repo.clone());

        let result = handler
            .handle(CompleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(result.report.profile.archetype, Archetype::DssIII);
        assert_eq!(result.report.markers.len(), 4);
        assert!(repo.stored(&id).unwrap().is_complete());
    }

    #[tokio::test]
    async fn incomplete_session_is_rejected() {
        let session = fresh_session();
        let id = *session.id();
        let handler =
            CompleteAssessmentHandler::new(Arc::new(MockAssessmentRepository::with_session(session)));

        let err = handler
            .handle(CompleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionUnanswered);
    }

    #[tokio::test]
    async fn completing_twice_is_rejected() {
        let session = fully_answered_session();
        let id = *session.id();
        let handler =
            CompleteAssessmentHandler::new(Arc::new(MockAssessmentRepository::with_session(session)));

        handler
            .handle(CompleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap();
        let err = handler
            .handle(CompleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AssessmentCompleted);
    }
}
