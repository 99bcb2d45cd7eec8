/// Raw stack status reported while an update is converging
pub const UPDATE_IN_PROGRESS: &str = "UPDATE_IN_PROGRESS";

/// Convergence state of the declarative stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStatus {
    UpdateInProgress,
    /// Any other stack status, kept verbatim for logging
    Steady(String),
}

impl DeploymentStatus {
    pub fn from_raw(raw: &str) -> Self {
        if raw == UPDATE_IN_PROGRESS {
            Self::UpdateInProgress
        } else {
            Self::Steady(raw.to_string())
        }
    }

    pub fn is_update_in_progress(&self) -> bool {
        matches!(self, Self::UpdateInProgress)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::UpdateInProgress => UPDATE_IN_PROGRESS,
            Self::Steady(raw) => raw,
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
