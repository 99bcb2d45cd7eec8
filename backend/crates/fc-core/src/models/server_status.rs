use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle status of the game server, derived from infrastructure on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    /// No running tasks and no update in flight
    Stopped,
    /// A stack update is converging
    Working,
    /// At least one task is running
    Running,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Working => "working",
            Self::Running => "running",
        }
    }

    /// Steady states are the only ones a transition can target
    pub fn is_steady(&self) -> bool {
        !matches!(self, Self::Working)
    }
}

impl FromStr for ServerStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "stopped" => Ok(Self::Stopped),
            "working" => Ok(Self::Working),
            "running" => Ok(Self::Running),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
