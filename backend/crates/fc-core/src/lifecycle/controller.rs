//! Lifecycle controller
//!
//! Reads the infrastructure signals, derives status, and applies start/stop
//! transitions as declarative stack updates. Holds no status of its own:
//! every call re-reads the infrastructure, which is what makes concurrent and
//! repeated requests safe without any in-process locking.

use crate::{
    ClusterGateway, ClusterSignal, DeploymentParameters, DesiredParameterSet,
    Result as CoreErrorResult, Rejection, ServerAction, ServerStatus, StackGateway, StackSignal,
    SubmissionReceipt, TransitionOutcome, derive_status,
};

use std::sync::Arc;

use log::{debug, error, info, warn};

/// Raw facts read from both subsystems for one observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedSignals {
    pub stack: StackSignal,
    /// `None` when the stack was mid-update (cluster not consulted) or the cluster is missing
    pub cluster: Option<ClusterSignal>,
}

impl ObservedSignals {
    pub fn status(&self) -> ServerStatus {
        derive_status(&self.stack, self.cluster.as_ref())
    }
}

pub struct LifecycleController {
    stack: Arc<dyn StackGateway>,
    cluster: Arc<dyn ClusterGateway>,
    parameters: DeploymentParameters,
}

impl LifecycleController {
    pub fn new(
        stack: Arc<dyn StackGateway>,
        cluster: Arc<dyn ClusterGateway>,
        parameters: DeploymentParameters,
    ) -> Self {
        Self {
            stack,
            cluster,
            parameters,
        }
    }

    pub fn parameters(&self) -> &DeploymentParameters {
        &self.parameters
    }

    /// Read the stack, then the cluster only if the stack has settled.
    pub async fn read_signals(&self) -> CoreErrorResult<ObservedSignals> {
        let stack = self.stack.describe().await?;
        debug!(
            "Stack signal: deployment={}, desired={:?}",
            stack.deployment_status, stack.desired_state
        );

        if stack.deployment_status.is_update_in_progress() {
            return Ok(ObservedSignals {
                stack,
                cluster: None,
            });
        }

        let cluster = self.cluster.describe().await?;
        match cluster {
            Some(signal) => debug!("Cluster signal: running_tasks={}", signal.running_task_count),
            None => warn!("Cluster not found, treating as zero running tasks"),
        }

        Ok(ObservedSignals { stack, cluster })
    }

    /// Current status, always freshly derived.
    pub async fn status(&self) -> CoreErrorResult<ServerStatus> {
        let status = self.read_signals().await?.status();
        debug!("Derived server status: {}", status);
        Ok(status)
    }

    /// Validate `action` against the live status and submit its parameter set.
    ///
    /// Rejects only when the observed status already equals the action's
    /// target. A request while `Working` is resubmitted with the same
    /// target parameters.
    ///
    /// # Errors
    /// Propagates read failures, `IncompleteParameters`, and `SubmissionFailure`.
    /// Nothing is retried.
    pub async fn apply(&self, action: ServerAction) -> CoreErrorResult<TransitionOutcome> {
        let requested = action.target_status();
        let observed = self.status().await?;

        if observed == requested {
            let rejection = Rejection::for_action(action);
            info!("Rejected {} request: {}", action, rejection);
            return Ok(TransitionOutcome::Rejected(rejection));
        }

        if observed == ServerStatus::Working {
            info!(
                "{} requested while an update is converging, resubmitting target parameters",
                action
            );
        }

        let parameters = DesiredParameterSet::for_action(action, &self.parameters)?;

        let receipt = self.stack.submit(&parameters).await.inspect_err(|e| {
            error!("Error updating stack: {}", e);
        })?;

        match &receipt {
            SubmissionReceipt::Submitted { stack_id } => {
                info!("Stack update initiated ({}): {}", action, stack_id)
            }
            SubmissionReceipt::Unchanged => {
                info!("Stack already carries the {} parameters", action)
            }
        }

        Ok(TransitionOutcome::Accepted {
            target: requested,
            receipt,
        })
    }
}
