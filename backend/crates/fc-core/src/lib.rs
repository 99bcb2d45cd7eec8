pub mod derive;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod models;

pub use derive::derive_status;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use gateway::{ClusterGateway, StackGateway, SubmissionReceipt};
pub use lifecycle::controller::{LifecycleController, ObservedSignals};
pub use lifecycle::rejection::Rejection;
pub use lifecycle::transition_outcome::TransitionOutcome;
pub use models::cluster_signal::ClusterSignal;
pub use models::deployment_parameters::DeploymentParameters;
pub use models::deployment_status::DeploymentStatus;
pub use models::desired_parameter_set::DesiredParameterSet;
pub use models::desired_state::DesiredState;
pub use models::parameter_key::ParameterKey;
pub use models::server_action::ServerAction;
pub use models::server_status::ServerStatus;
pub use models::stack_signal::StackSignal;

#[cfg(test)]
mod tests;
