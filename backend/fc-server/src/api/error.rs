//! Lifecycle API error types
//!
//! Each variant maps to the JSON body shape the clients already expect:
//! informational rejections carry `message`, failures carry `error`.

use fc_auth::AuthError;
use fc_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;

pub const INVALID_PASSWORD: &str = "Invalid password";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong or absent credential (401)
    #[error("Unauthorized: invalid password {location}")]
    Unauthorized { location: ErrorLocation },

    /// Already in the requested state (400)
    #[error("Rejected transition: {message} {location}")]
    InvalidTransition {
        message: String,
        location: ErrorLocation,
    },

    /// Managed stack is missing (500, a configuration fault)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Infrastructure failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition<S: Into<String>>(message: S) -> Self {
        ApiError::InvalidTransition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidTransition { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Location goes to the log only
        match &self {
            ApiError::Unauthorized { .. } | ApiError::InvalidTransition { .. } => {
                log::warn!("{}", self)
            }
            _ => log::error!("{}", self),
        }

        let body = match self {
            ApiError::Unauthorized { .. } => json!({ "error": INVALID_PASSWORD }),
            ApiError::InvalidTransition { message, .. } => json!({ "message": message }),
            ApiError::NotFound { message, .. } | ApiError::Internal { message, .. } => {
                json!({ "error": message })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::ResourceNotFound { .. } => ApiError::NotFound {
                message: e.public_message(),
                location,
            },
            _ => ApiError::Internal {
                message: e.public_message(),
                location,
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidPassword { .. } => ApiError::Unauthorized {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MissingSecret { .. } => ApiError::Internal {
                message: e.public_message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
