use crate::{DeploymentStatus, DesiredState};

/// What the stack describer reports about the declarative stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSignal {
    pub deployment_status: DeploymentStatus,
    /// Current `ServerState` parameter, if the stack carries one
    pub desired_state: Option<DesiredState>,
}
