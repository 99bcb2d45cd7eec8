use crate::{DesiredState, ServerStatus};

/// A requested lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerAction {
    Start,
    Stop,
}

impl ServerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    /// Steady status the server converges to once the action completes
    pub fn target_status(&self) -> ServerStatus {
        match self {
            Self::Start => ServerStatus::Running,
            Self::Stop => ServerStatus::Stopped,
        }
    }

    pub fn desired_state(&self) -> DesiredState {
        match self {
            Self::Start => DesiredState::Running,
            Self::Stop => DesiredState::Stopped,
        }
    }
}

impl std::fmt::Display for ServerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
