use serde::Deserialize;

/// Body of POST /start and POST /stop
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordRequest {
    #[serde(default)]
    pub password: Option<String>,
}
