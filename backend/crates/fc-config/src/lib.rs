mod auth_config;
mod aws_config;
mod config;
mod deployment_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use aws_config::AwsConfig;
pub use config::Config;
pub use deployment_config::DeploymentConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "FC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fc";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_STACK_NAME: &str = "factorio";
const DEFAULT_CLUSTER_NAME: &str = "factorio-cluster";

const DEFAULT_IMAGE_TAG: &str = "stable";
const DEFAULT_SPOT_PRICE: &str = "0.08";
const DEFAULT_KEY_PAIR_NAME: &str = "factorio-key-pair";
const DEFAULT_INSTANCE_TYPE: &str = "r6in.large";
const DEFAULT_ENABLE_RCON: bool = true;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
