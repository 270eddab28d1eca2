//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AgeInput, AssessmentResponse, AssessmentStatus, ErrorResponse, OptionResponse,
    QuestionResponse, RecordAnswerRequest, StartAssessmentRequest,
};
pub use handlers::{health, AssessmentHandlers};
pub use routes::assessment_routes;
