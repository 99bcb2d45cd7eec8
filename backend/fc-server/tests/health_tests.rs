//! Integration tests for health endpoints
mod common;

use crate::common::{FakeStack, body_json, create_test_app, get};

use fc_core::DesiredState;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_version() {
    let (app, _) = create_test_app(FakeStack::settled(DesiredState::Stopped), 0);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_live_is_ok() {
    let (app, _) = create_test_app(FakeStack::missing(), 0);

    let response = app.oneshot(get("/live")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_follows_infrastructure_reachability() {
    let (ready, _) = create_test_app(FakeStack::settled(DesiredState::Running), 1);
    let (not_ready, _) = create_test_app(FakeStack::missing(), 0);

    let ok = ready.oneshot(get("/ready")).await.unwrap();
    let unavailable = not_ready.oneshot(get("/ready")).await.unwrap();

    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
}
