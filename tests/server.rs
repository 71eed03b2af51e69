//! HTTP transport tests, driven in-process through `tower::ServiceExt`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use realtime_agency::orchestrator::ScenarioRegistry;
use realtime_agency::server::{router, AppState};
use realtime_agency::services::MemorySink;

async fn app(sink: Arc<MemorySink>) -> Router {
    let state = AppState::new(ScenarioRegistry::builtin().clone(), sink).await.unwrap();
    router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_and_catalog() {
    let app = app(Arc::new(MemorySink::new())).await;

    let (status, body) = send(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(app.clone(), get("/scenarios")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["defaultScenario"], "ideaEvaluator");
    assert_eq!(body["scenarios"].as_array().unwrap().len(), 3);
    assert_eq!(body["scenarios"][1]["companyName"], "Norsk Helsevesen");

    let (_, body) = send(app, get("/samples")).await;
    assert_eq!(body[0]["id"], "email-processing");
    assert_eq!(body[0]["exampleQuestions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn session_launch() {
    let app = app(Arc::new(MemorySink::new())).await;

    let (status, body) = send(app.clone(), get("/session?agentConfig=norwegianIntake&initialPrompt=Hei")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rootAgent"], "permissionRequest");
    assert_eq!(body["initialPrompt"], "Hei");
    assert_eq!(body["agents"][1]["handoffs"], json!(["permissionRequest"]));

    let (_, body) = send(app.clone(), get("/session")).await;
    assert_eq!(body["scenario"], "ideaEvaluator");

    let (status, body) = send(app, get("/session?agentConfig=chatSupervisor")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_SCENARIO");
}

#[tokio::test]
async fn tool_calls_map_errors_to_status() {
    let app = app(Arc::new(MemorySink::new())).await;

    let (status, body) = send(app.clone(), get("/scenarios/ideaEvaluator/tools")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "calculateAutomationScore");

    let (status, body) = send(
        app.clone(),
        post(
            "/scenarios/ideaEvaluator/tools/generateAutomationRoadmap",
            json!({ "tier": "Mid", "taskDescription": "Lead scoring" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["roadmap"]["budget"], "€5,000-15,000");

    let (status, body) = send(
        app.clone(),
        post("/scenarios/ideaEvaluator/tools/generateAutomationRoadmap", json!({ "tier": "Mid" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "SCHEMA_VIOLATION");

    let (status, _) = send(app.clone(), post("/scenarios/ideaEvaluator/tools/teleport", json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app, get("/scenarios/nowhere/tools")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn intake_calls_reach_the_sink() {
    let sink = Arc::new(MemorySink::new());
    let app = app(sink.clone()).await;

    let (status, body) = send(
        app,
        post(
            "/scenarios/norwegianIntake/tools/log_permission_granted",
            json!({ "patient_consent": "GRANTED", "consent_timestamp": "2026-10-19T08:30:00Z" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(sink.records()[0].kind, "permission");
    assert_eq!(sink.records()[0].fields["patient_consent"], "GRANTED");
}

#[tokio::test]
async fn malformed_body_returns_error_json() {
    let app = app(Arc::new(MemorySink::new())).await;
    let uri = "/scenarios/ideaEvaluator/tools/calculateAutomationScore";

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "SCHEMA_VIOLATION");
    assert!(body["error"].as_str().unwrap().contains("calculateAutomationScore"));

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(r#"{"tier":"Low"}"#))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "SCHEMA_VIOLATION");
}
