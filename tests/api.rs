use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use exam_timer::{
    api::create_router,
    config::TimerConfig,
    exam::QuestionBank,
    state::AppState,
};

fn router(duration_seconds: u64) -> Router {
    let config = TimerConfig { duration_seconds, ..TimerConfig::default() };
    let state = AppState::new(20554, "127.0.0.1".to_string(), config, QuestionBank::sample());
    create_router(Arc::new(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_and_status() {
    let app = router(1200);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exam_status"], "not_started");
    assert_eq!(body["question_count"], 4);
    assert_eq!(body["timer"]["active"], false);
}

#[tokio::test]
async fn questions_do_not_leak_answers() {
    let app = router(1200);

    let (status, body) = send(&app, "GET", "/exam/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    assert!(questions.iter().all(|q| q.get("correct").is_none()));
}

#[tokio::test(start_paused = true)]
async fn countdown_submits_draft_on_expiry() {
    let app = router(2);

    let (status, body) = send(&app, "POST", "/exam/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exam"]["status"], "in_progress");

    let (status, _) = send(&app, "POST", "/exam/answers", Some(json!({"answers": {"1": "b", "4": "d"}}))).await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let (_, body) = send(&app, "GET", "/exam/timer", None).await;
    assert_eq!(body["display"], "0:02");
    assert_eq!(body["timer"]["active"], true);
    assert_eq!(body["timer"]["remaining_seconds"], 1);
    assert_eq!(body["notice"], Value::Null);

    let (status, _) = send(&app, "GET", "/exam/result", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let (_, body) = send(&app, "GET", "/exam/timer", None).await;
    assert_eq!(body["display"], "0:00");
    assert_eq!(body["timer"]["expired"], true);
    assert_eq!(body["notice"]["message"], "Time is up! Submitting exam...");

    let (status, body) = send(&app, "GET", "/exam/result", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], 2);
    assert_eq!(body["result"]["total"], 4);
    assert_eq!(body["result"]["rating"], "Needs Improvement");
    assert_eq!(body["submitted_by"], "time_expired");

    let (status, _) = send(&app, "POST", "/exam/submit", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn candidate_submission_stops_countdown() {
    let app = router(30);
    send(&app, "POST", "/exam/start", None).await;

    let (status, body) = send(&app, "POST", "/exam/submit", Some(json!({"answers": {"2": "c"}}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], 1);
    assert_eq!(body["submitted_by"], "candidate");

    tokio::time::sleep(Duration::from_secs(60)).await;
    let (_, body) = send(&app, "GET", "/exam/timer", None).await;
    assert_eq!(body["timer"]["active"], false);
    assert_eq!(body["timer"]["expired"], false);
    assert_eq!(body["notice"], Value::Null);
}

#[tokio::test]
async fn rejects_invalid_transitions() {
    let app = router(1200);

    let (status, _) = send(&app, "POST", "/exam/answers", Some(json!({"answers": {"1": "a"}}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "POST", "/exam/start", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "POST", "/exam/start", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (status, body) = send(&app, "POST", "/exam/answers", Some(json!({"answers": {"42": "a"}}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "unknown question id: 42");
}

#[tokio::test]
async fn malformed_final_answers_are_not_submitted() {
    let app = router(1200);
    send(&app, "POST", "/exam/start", None).await;
    send(&app, "POST", "/exam/answers", Some(json!({"answers": {"1": "b"}}))).await;

    let (status, body) = send(&app, "POST", "/exam/submit", Some(json!({"answers": {"2": "z"}}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let request = Request::builder()
        .method("POST")
        .uri("/exam/submit")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"answers": {"2": "c"}}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["exam_status"], "in_progress");
    let (status, _) = send(&app, "GET", "/exam/result", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "POST", "/exam/submit", Some(json!({"answers": {"2": "c"}}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], 2);
}

#[tokio::test]
async fn empty_submission_uses_saved_draft() {
    let app = router(1200);
    send(&app, "POST", "/exam/start", None).await;
    send(&app, "POST", "/exam/answers", Some(json!({"answers": {"3": "a"}}))).await;

    let (status, body) = send(&app, "POST", "/exam/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], 1);
    assert_eq!(body["submitted_by"], "candidate");
}
