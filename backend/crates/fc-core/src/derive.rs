//! Status derivation
//!
//! Maps the two infrastructure signals onto a single `ServerStatus`.
//! An update in progress always wins: right after a submission the task
//! count has not moved yet, so it cannot be trusted until the stack settles.
//! Once settled, the task count is the only signal that tells running from
//! stopped.

use crate::{ClusterSignal, ServerStatus, StackSignal};

pub fn derive_status(stack: &StackSignal, cluster: Option<&ClusterSignal>) -> ServerStatus {
    if stack.deployment_status.is_update_in_progress() {
        return ServerStatus::Working;
    }

    match cluster {
        Some(signal) if signal.running_task_count >= 1 => ServerStatus::Running,
        _ => ServerStatus::Stopped,
    }
}
