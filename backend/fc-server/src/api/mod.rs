pub mod error;
pub mod lifecycle;
pub mod lifecycle_service;
pub mod message_response;
pub mod password_request;
pub mod status_response;
