pub mod cluster_signal;
pub mod deployment_parameters;
pub mod deployment_status;
pub mod desired_parameter_set;
pub mod desired_state;
pub mod parameter_key;
pub mod server_action;
pub mod server_status;
pub mod stack_signal;
