//! Assessment command and query handlers.

mod complete_assessment;
mod delete_assessment;
mod get_assessment;
mod navigate;
mod record_answer;
mod start_assessment;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use delete_assessment::{DeleteAssessmentCommand, DeleteAssessmentHandler};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use navigate::{NavigateCommand, NavigateHandler, NavigateResult, NavigationDirection};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentRepository;

/// Fetches a session or fails with `AssessmentNotFound`.
async fn load_session(
    repository: &dyn AssessmentRepository,
    id: &AssessmentId,
) -> Result<AssessmentSession, DomainError> {
    repository.find(id).await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::AssessmentNotFound,
            format!("Assessment not found: {}", id),
        )
    })
}
