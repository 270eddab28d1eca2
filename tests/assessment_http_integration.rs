//! Integration tests for assessment HTTP endpoints.
//!
//! These tests drive the full router (handlers, in-memory repository and
//! middleware) through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ds2_profile::adapters::http::{router, AssessmentHandlers};
use ds2_profile::adapters::InMemoryAssessmentRepository;
use ds2_profile::config::ServerConfig;
use ds2_profile::domain::questionnaire::{
    Dimension, Marker, Question, QuestionBank, QuestionOption,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn question(id: u32, dimension: Dimension, marker: &str) -> Question {
    Question {
        id,
        dimension,
        marker: Marker::new(marker).unwrap(),
        text: format!("Question {}", id),
        context: None,
        options: vec![
            QuestionOption::new("Strong", 1.0),
            QuestionOption::new("Partial", 0.5),
            QuestionOption::new("Weak", 0.0),
        ],
    }
}

fn bank() -> QuestionBank {
    QuestionBank::from_questions(vec![
        question(1, Dimension::Ami, "first_principles"),
        question(2, Dimension::Ami, "boundary_checking"),
        question(3, Dimension::Cmi, "paradox_tolerance"),
        question(4, Dimension::Cmi, "analogical_transfer"),
    ])
    .unwrap()
}

fn app() -> Router {
    let handlers = AssessmentHandlers::new(
        Arc::new(bank()),
        Arc::new(InMemoryAssessmentRepository::new()),
        Some(7),
    );
    router(handlers, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn start(app: &Router, body: Value) -> String {
    let (status, json) = send(app, Method::POST, "/assessments", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn health_check_responds() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn start_returns_first_question() {
    let app = app();
    let (status, json) = send(&app, Method::POST, "/assessments", Some(json!({"age": 30}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["age"], 30);
    assert_eq!(json["total_questions"], 4);
    assert_eq!(json["current_index"], 0);
    assert_eq!(json["current_question"]["dimension"], "AMI");
    assert_eq!(json["can_advance"], false);
    assert!(json["current_question"]["options"][0].get("score").is_none());
}

#[tokio::test]
async fn start_without_body_has_no_age() {
    let app = app();
    let (status, json) = send(&app, Method::POST, "/assessments", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json.get("age").is_none());
}

#[tokio::test]
async fn full_run_produces_profile() {
    let app = app();
    let id = start(&app, json!({"age": "70"})).await;

    loop {
        let (_, state) = send(&app, Method::GET, &format!("/assessments/{}", id), None).await;
        let question = &state["current_question"];
        let option_index = if question["dimension"] == "AMI" { 0 } else { 2 };

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/assessments/{}/answers", id),
            Some(json!({
                "question_id": question["id"],
                "option_index": option_index,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, next) =
            send(&app, Method::POST, &format!("/assessments/{}/next", id), None).await;
        assert_eq!(status, StatusCode::OK);
        if next["status"] == "completed" {
            break;
        }
    }

    let (status, json) = send(&app, Method::GET, &format!("/assessments/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "completed");
    assert_eq!(json["progress"], 1.0);

    let profile = &json["report"]["profile"];
    assert_eq!(profile["ami"], 10.0);
    assert_eq!(profile["cmi"], 0.4);
    assert_eq!(profile["cmi_raw"], 0.0);
    assert_eq!(profile["archetype"], "DSS-I");
    assert_eq!(profile["age_adjustment"]["age"], 70);
    assert_eq!(profile["age_adjustment"]["ami"], 1.2);
    assert_eq!(profile["timing"]["questions"].as_object().unwrap().len(), 4);
    assert_eq!(json["report"]["archetype_name"], "Systematic Analytical");
    assert_eq!(json["report"]["compatibility"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn previous_moves_back() {
    let app = app();
    let id = start(&app, json!({})).await;

    let (_, state) = send(&app, Method::GET, &format!("/assessments/{}", id), None).await;
    send(
        &app,
        Method::POST,
        &format!("/assessments/{}/answers", id),
        Some(json!({"question_id": state["current_question"]["id"], "option_index": 1})),
    )
    .await;
    let (_, forward) = send(&app, Method::POST, &format!("/assessments/{}/next", id), None).await;
    assert_eq!(forward["current_index"], 1);
    assert_eq!(forward["can_go_back"], true);

    let (status, back) =
        send(&app, Method::POST, &format!("/assessments/{}/previous", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(back["current_index"], 0);
    assert_eq!(back["selected_option"], 1);
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn next_without_answer_conflicts() {
    let app = app();
    let id = start(&app, json!({})).await;

    let (status, json) = send(&app, Method::POST, &format!("/assessments/{}/next", id), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "QUESTION_UNANSWERED");
}

#[tokio::test]
async fn option_out_of_range_is_bad_request() {
    let app = app();
    let id = start(&app, json!({})).await;

    let (status, json) = send(
        &app,
        Method::POST,
        &format!("/assessments/{}/answers", id),
        Some(json!({"question_id": 1, "option_index": 9})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(json["details"]["option_index"], "9");
}

#[tokio::test]
async fn unknown_question_is_not_found() {
    let app = app();
    let id = start(&app, json!({})).await;

    let (status, json) = send(
        &app,
        Method::POST,
        &format!("/assessments/{}/answers", id),
        Some(json!({"question_id": 77, "option_index": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "QUESTION_NOT_FOUND");
}

#[tokio::test]
async fn early_completion_conflicts() {
    let app = app();
    let id = start(&app, json!({})).await;

    let (status, json) =
        send(&app, Method::POST, &format!("/assessments/{}/complete", id), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "QUESTION_UNANSWERED");
}

#[tokio::test]
async fn delete_discards_assessment() {
    let app = app();
    let id = start(&app, json!({})).await;
    let uri = format!("/assessments/{}", id);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "ASSESSMENT_NOT_FOUND");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_assessment_is_not_found() {
    let app = app();
    let uri = "/assessments/67e55044-10b1-426f-9247-bb680e5fe0c8";

    let (status, json) = send(&app, Method::GET, uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "ASSESSMENT_NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = app();

    let (status, json) = send(&app, Method::GET, "/assessments/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}
