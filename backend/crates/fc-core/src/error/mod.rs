use crate::{ErrorLocation, ParameterKey};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Stack {stack_name} not found {location}")]
    ResourceNotFound {
        stack_name: String,
        location: ErrorLocation,
    },

    #[error("Infrastructure query failed: {message} {location}")]
    InfrastructureQuery {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stack update failed: {message} {location}")]
    SubmissionFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Incomplete parameter set: {key} has no value {location}")]
    IncompleteParameters {
        key: ParameterKey,
        location: ErrorLocation,
    },

    #[error("Invalid server status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid desired state: {value} {location}")]
    InvalidDesiredState {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(stack_name: S) -> Self {
        CoreError::ResourceNotFound {
            stack_name: stack_name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn query<S: Into<String>>(message: S) -> Self {
        CoreError::InfrastructureQuery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn submission<S: Into<String>>(message: S) -> Self {
        CoreError::SubmissionFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to hand back to a caller: no source location attached.
    pub fn public_message(&self) -> String {
        match self {
            Self::ResourceNotFound { stack_name, .. } => format!("Stack {} not found", stack_name),
            Self::InfrastructureQuery { message, .. } => {
                format!("Infrastructure query failed: {}", message)
            }
            Self::SubmissionFailure { message, .. } => format!("Stack update failed: {}", message),
            Self::IncompleteParameters { key, .. } => {
                format!("Incomplete parameter set: {} has no value", key)
            }
            Self::InvalidStatus { value, .. } => format!("Invalid server status: {}", value),
            Self::InvalidDesiredState { value, .. } => format!("Invalid desired state: {}", value),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
