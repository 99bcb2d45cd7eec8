//! Translation from raw AWS responses to core signals.
//!
//! Kept free of SDK types so the mapping rules can be tested without a client.

use crate::{DOES_NOT_EXIST_MESSAGE, NO_UPDATES_MESSAGE, VALIDATION_ERROR_CODE};

use fc_core::{ClusterSignal, CoreError, DeploymentStatus, DesiredState, ParameterKey, StackSignal};

use log::warn;

/// Build a stack signal from the raw status and the stack's parameter pairs.
///
/// A stack without a status is reported as an empty steady status, which
/// never reads as working. An unrecognised `ServerState` value is dropped.
pub fn stack_signal<'a>(
    stack_status: Option<&str>,
    parameters: impl IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
) -> StackSignal {
    let server_state = ParameterKey::ServerState.as_str();

    let desired_state = parameters
        .into_iter()
        .find(|(key, _)| *key == Some(server_state))
        .and_then(|(_, value)| value)
        .and_then(|value| match value.parse::<DesiredState>() {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Ignoring stack parameter: {}", e);
                None
            }
        });

    StackSignal {
        deployment_status: DeploymentStatus::from_raw(stack_status.unwrap_or_default()),
        desired_state,
    }
}

/// Negative counts never come back from ECS; clamp them rather than fail.
pub fn cluster_signal(running_tasks_count: i32) -> ClusterSignal {
    ClusterSignal {
        running_task_count: u32::try_from(running_tasks_count).unwrap_or(0),
    }
}

/// Classify a failed describe call.
#[track_caller]
pub fn describe_failure(
    stack_name: &str,
    code: Option<&str>,
    message: Option<&str>,
    rendered: String,
) -> CoreError {
    let missing = code == Some(VALIDATION_ERROR_CODE)
        && message.is_some_and(|m| m.contains(DOES_NOT_EXIST_MESSAGE));

    if missing {
        CoreError::not_found(stack_name)
    } else {
        CoreError::query(rendered)
    }
}

/// CloudFormation refuses an update that changes nothing; that is not a failure here.
pub fn is_no_update_message(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some(VALIDATION_ERROR_CODE) && message.is_some_and(|m| m.contains(NO_UPDATES_MESSAGE))
}
