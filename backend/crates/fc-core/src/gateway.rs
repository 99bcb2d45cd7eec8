//! Seams to the infrastructure subsystems
//!
//! Implementations own the resource names they talk to; the controller only
//! sees signals and parameter sets.

use crate::{ClusterSignal, DesiredParameterSet, Result as CoreErrorResult, StackSignal};

use async_trait::async_trait;

/// Acknowledgement of a stack update submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReceipt {
    /// The update was queued against the stack
    Submitted { stack_id: String },
    /// The stack already carries exactly these parameters
    Unchanged,
}

#[async_trait]
pub trait StackGateway: Send + Sync {
    /// Describe the stack.
    ///
    /// # Errors
    /// `CoreError::ResourceNotFound` when the stack does not exist,
    /// `CoreError::InfrastructureQuery` for any other failure.
    async fn describe(&self) -> CoreErrorResult<StackSignal>;

    /// Submit a declarative update. Returns as soon as the subsystem acknowledges it.
    ///
    /// # Errors
    /// `CoreError::SubmissionFailure` when the subsystem rejects the update or is unreachable.
    async fn submit(&self, parameters: &DesiredParameterSet) -> CoreErrorResult<SubmissionReceipt>;
}

#[async_trait]
pub trait ClusterGateway: Send + Sync {
    /// Describe the cluster. `None` when the cluster is not registered.
    async fn describe(&self) -> CoreErrorResult<Option<ClusterSignal>>;
}
