use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret guarding start/stop
    pub password: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.password.as_deref() {
            Some(password) if !password.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::auth(
                "auth.password is required (set FC_AUTH_PASSWORD)",
            )),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
