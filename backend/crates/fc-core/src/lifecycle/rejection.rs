use crate::ServerAction;

/// Why a transition was turned down without touching the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyRunning,
    AlreadyStopped,
}

impl Rejection {
    /// Rejection for an action whose target is already the observed status
    pub fn for_action(action: ServerAction) -> Self {
        match action {
            ServerAction::Start => Self::AlreadyRunning,
            ServerAction::Stop => Self::AlreadyStopped,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AlreadyRunning => "already running",
            Self::AlreadyStopped => "already stopped",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
