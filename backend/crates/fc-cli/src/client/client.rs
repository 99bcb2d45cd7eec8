use crate::{CliClientResult, ClientError};

use fc_core::ServerStatus;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server answer to start/stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    pub message: String,
    /// `false` when the server was already in the requested state
    pub accepted: bool,
}

/// HTTP client for the fc-server lifecycle API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send and decode; error bodies carry `error` (failures) or `message` (rejections).
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<(StatusCode, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() || status == StatusCode::BAD_REQUEST {
            return Ok((status, serde_json::from_slice(&bytes)?));
        }

        // Timeout and overload responses carry no JSON body
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let message = body
            .get("error")
            .or_else(|| body.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// GET /status
    pub async fn status(&self) -> CliClientResult<ServerStatus> {
        let (status, body) = self.execute(self.request(Method::GET, "/status")).await?;
        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), message_of(&body)));
        }
        Ok(serde_json::from_value(body["status"].clone())?)
    }

    /// POST /start
    pub async fn start(&self, password: Option<&str>) -> CliClientResult<ActionReply> {
        self.action("/start", password).await
    }

    /// POST /stop
    pub async fn stop(&self, password: Option<&str>) -> CliClientResult<ActionReply> {
        self.action("/stop", password).await
    }

    async fn action(&self, path: &str, password: Option<&str>) -> CliClientResult<ActionReply> {
        #[derive(Serialize)]
        struct PasswordRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }

        let req = self
            .request(Method::POST, path)
            .json(&PasswordRequest { password });
        let (status, body) = self.execute(req).await?;

        Ok(ActionReply {
            message: message_of(&body),
            accepted: status.is_success(),
        })
    }
}

fn message_of(body: &Value) -> String {
    body.get("message")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
