mod deployment_status;
mod desired_parameter_set;
mod server_status;
