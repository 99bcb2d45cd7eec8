use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("RCON protocol error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },

    #[error("RCON authentication failed {location}")]
    AuthenticationFailed { location: ErrorLocation },

    #[error("Timed out during {operation} {location}")]
    Timeout {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Player state error for {path}: {message} {location}")]
    State {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },
}

impl GameError {
    #[track_caller]
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        GameError::Protocol {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(operation: &'static str) -> Self {
        GameError::Timeout {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn state<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        GameError::State {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for GameError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        GameError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, GameError>;
