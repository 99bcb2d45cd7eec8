//! AWS-backed gateways: CloudFormation for the stack, ECS for the cluster.

mod cloudformation;
mod ecs;
mod settings;
mod signals;


pub use cloudformation::CloudFormationStack;
pub use ecs::EcsCluster;
pub use settings::{AwsSettings, load_sdk_config};
pub use signals::{cluster_signal, describe_failure, is_no_update_message, stack_signal};

/// Error code CloudFormation uses for both missing stacks and no-op updates
pub(crate) const VALIDATION_ERROR_CODE: &str = "ValidationError";
pub(crate) const NO_UPDATES_MESSAGE: &str = "No updates are to be performed";
pub(crate) const DOES_NOT_EXIST_MESSAGE: &str = "does not exist";
