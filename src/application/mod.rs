//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate an assessment session; the single query reads one back.

pub mod handlers;

pub use handlers::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler,
    GetAssessmentHandler, GetAssessmentQuery, NavigateCommand, NavigateHandler, NavigateResult,
    NavigationDirection, RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
};
