//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_assessment, delete_assessment, get_assessment, next_question, previous_question,
    record_answer, start_assessment, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(start_assessment))
        .route("/:id", get(get_assessment).delete(delete_assessment))
        .route("/:id/answers", post(record_answer))
        .route("/:id/next", post(next_question))
        .route("/:id/previous", post(previous_question))
        .route("/:id/complete", post(complete_assessment))
        .with_state(handlers)
}
