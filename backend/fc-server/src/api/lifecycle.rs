use crate::{ApiResult, AppState, MessageResponse, PasswordRequest, StatusResponse};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// GET /status
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    let status = state.lifecycle.get_status().await?;
    Ok(Json(StatusResponse { status }))
}

/// POST /start
pub async fn start_server(
    State(state): State<AppState>,
    payload: Result<Json<PasswordRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let request = credential(payload);
    let response = state
        .lifecycle
        .request_start(request.password.as_deref())
        .await?;
    Ok(Json(response))
}

/// POST /stop
pub async fn stop_server(
    State(state): State<AppState>,
    payload: Result<Json<PasswordRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let request = credential(payload);
    let response = state
        .lifecycle
        .request_stop(request.password.as_deref())
        .await?;
    Ok(Json(response))
}

/// A missing or unreadable body is an absent credential, not a distinct error.
fn credential(payload: Result<Json<PasswordRequest>, JsonRejection>) -> PasswordRequest {
    match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::debug!("Unreadable lifecycle request body: {}", rejection);
            PasswordRequest::default()
        }
    }
}
