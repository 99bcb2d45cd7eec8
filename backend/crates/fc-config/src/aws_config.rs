use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLUSTER_NAME, DEFAULT_REGION, DEFAULT_STACK_NAME,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    /// CloudFormation stack that owns the server
    pub stack_name: String,
    /// ECS cluster whose running task count marks the server as up
    pub cluster_name: String,
    /// Static credentials; the default provider chain is used when both are unset
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: String::from(DEFAULT_REGION),
            stack_name: String::from(DEFAULT_STACK_NAME),
            cluster_name: String::from(DEFAULT_CLUSTER_NAME),
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

impl AwsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("aws.region", &self.region),
            ("aws.stack_name", &self.stack_name),
            ("aws.cluster_name", &self.cluster_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::aws(format!("{} cannot be empty", name)));
            }
        }

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(ConfigError::aws(
                "aws.access_key_id and aws.secret_access_key must be set together",
            ));
        }

        Ok(())
    }

    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

impl std::fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("region", &self.region)
            .field("stack_name", &self.stack_name)
            .field("cluster_name", &self.cluster_name)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
