pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    lifecycle::{get_status, start_server, stop_server},
    lifecycle_service::LifecycleService,
    message_response::MessageResponse,
    password_request::PasswordRequest,
    status_response::StatusResponse,
};
pub use routes::build_router;
pub use state::AppState;
