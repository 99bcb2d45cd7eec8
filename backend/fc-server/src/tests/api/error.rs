use crate::ApiError;

use fc_auth::AuthError;
use fc_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::sync::{Mutex, Once};

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http_body_util::BodyExt;

/// Records every log message so tests can count how often a failure is reported
struct CaptureLogger;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&CaptureLogger).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn captured_containing(needle: &str) -> usize {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_fixed_error() {
    let response = ApiError::unauthorized().into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Invalid password" }));
}

#[tokio::test]
async fn test_invalid_transition_returns_400_with_message() {
    let response = ApiError::invalid_transition("already running").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "message": "already running" }));
}

#[tokio::test]
async fn test_missing_stack_returns_500_without_location() {
    let error = ApiError::from(CoreError::not_found("factorio"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert_eq!(message, "Stack factorio not found");
    assert!(!message.contains(".rs"));
}

#[tokio::test]
async fn test_submission_failure_surfaces_verbatim() {
    let error = ApiError::from(CoreError::submission(
        "Stack is in UPDATE_IN_PROGRESS state and can not be updated",
    ));

    let json = body_json(error.into_response()).await;

    assert_eq!(
        json["error"],
        "Stack update failed: Stack is in UPDATE_IN_PROGRESS state and can not be updated"
    );
}

#[test]
fn test_auth_errors_map_to_status_codes() {
    let invalid = ApiError::from(AuthError::InvalidPassword {
        location: ErrorLocation::from(Location::caller()),
    });
    let missing = ApiError::from(AuthError::MissingSecret {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(missing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_failure_is_logged_once_when_responding() {
    capture_logs();
    let detail = "throttled while describing stack 7f3c";

    let error = ApiError::from(CoreError::query(detail));
    assert_eq!(captured_containing(detail), 0);

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(captured_containing(detail), 1);
}
