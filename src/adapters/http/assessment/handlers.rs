//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, DeleteAssessmentCommand,
    DeleteAssessmentHandler, GetAssessmentHandler,
    GetAssessmentQuery, NavigateCommand, NavigateHandler, NavigationDirection,
    RecordAnswerCommand, RecordAnswerHandler, StartAssessmentCommand, StartAssessmentHandler,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::domain::questionnaire::QuestionBank;
use crate::ports::AssessmentRepository;

use super::dto::{
    AgeInput, AssessmentResponse, ErrorResponse, RecordAnswerRequest, StartAssessmentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartAssessmentHandler>,
    record_handler: Arc<RecordAnswerHandler>,
    navigate_handler: Arc<NavigateHandler>,
    complete_handler: Arc<CompleteAssessmentHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    delete_handler: Arc<DeleteAssessmentHandler>,
}

impl AssessmentHandlers {
    /// Wires every handler to one bank and repository.
    pub fn new(
        bank: Arc<QuestionBank>,
        repository: Arc<dyn AssessmentRepository>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            start_handler: Arc::new(StartAssessmentHandler::new(
                bank,
                repository.clone(),
                seed,
            )),
            record_handler: Arc::new(RecordAnswerHandler::new(repository.clone())),
            navigate_handler: Arc::new(NavigateHandler::new(repository.clone())),
            complete_handler: Arc::new(CompleteAssessmentHandler::new(repository.clone())),
            get_handler: Arc::new(GetAssessmentHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteAssessmentHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /assessments - Start a new assessment
pub async fn start_assessment(
    State(handlers): State<AssessmentHandlers>,
    body: Option<Json<StartAssessmentRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = StartAssessmentCommand {
        age: req.age.map(AgeInput::into_raw),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(AssessmentResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /assessments/:id - Get assessment state
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetAssessmentQuery { assessment_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /assessments/:id/answers - Select an option
pub async fn record_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<RecordAnswerRequest>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RecordAnswerCommand {
        assessment_id,
        question_id: req.question_id,
        option_index: req.option_index,
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AssessmentResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /assessments/:id/next - Advance, completing after the last question
pub async fn next_question(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    navigate(handlers, assessment_id, NavigationDirection::Next).await
}

/// POST /assessments/:id/previous - Go back one question
pub async fn previous_question(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    navigate(handlers, assessment_id, NavigationDirection::Previous).await
}

async fn navigate(
    handlers: AssessmentHandlers,
    assessment_id: String,
    direction: NavigationDirection,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = NavigateCommand {
        assessment_id,
        direction,
    };

    match handlers.navigate_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AssessmentResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /assessments/:id/complete - Score the assessment
pub async fn complete_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .complete_handler
        .handle(CompleteAssessmentCommand { assessment_id })
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(AssessmentResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /assessments/:id - Discard an assessment
pub async fn delete_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteAssessmentCommand { assessment_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_id(raw: &str) -> Result<AssessmentId, Response> {
    raw.parse::<AssessmentId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid assessment ID")),
        )
            .into_response()
    })
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::AssessmentNotFound | ErrorCode::QuestionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::AssessmentCompleted
        | ErrorCode::QuestionUnanswered => StatusCode::CONFLICT,
        ErrorCode::QuestionBankEmpty
        | ErrorCode::QuestionBankInvalid
        | ErrorCode::StorageError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, message = %error.message, "Request failed");
    }
    (status, Json(ErrorResponse::from(error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::AssessmentNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::QuestionUnanswered), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::AssessmentCompleted), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::InvalidStateTransition), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            status_for(ErrorCode::StorageError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn garbage_id_is_bad_request() {
        let response = parse_id("nope").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
