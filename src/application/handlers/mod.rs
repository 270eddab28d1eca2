//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler,
    GetAssessmentHandler, GetAssessmentQuery, NavigateCommand, NavigateHandler, NavigateResult,
    NavigationDirection, RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
};
