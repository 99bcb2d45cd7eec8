//! Lifecycle API: status, start, and stop composed from the gate and the controller.

use crate::{ApiError, ApiResult, MessageResponse};

use fc_auth::AccessGate;
use fc_core::{LifecycleController, ServerAction, ServerStatus, TransitionOutcome};

use log::info;

pub struct LifecycleService {
    controller: LifecycleController,
    gate: AccessGate,
}

impl LifecycleService {
    pub fn new(controller: LifecycleController, gate: AccessGate) -> Self {
        Self { controller, gate }
    }

    /// Ungated and side-effect free.
    pub async fn get_status(&self) -> ApiResult<ServerStatus> {
        Ok(self.controller.status().await?)
    }

    pub async fn request_start(&self, credential: Option<&str>) -> ApiResult<MessageResponse> {
        self.request(ServerAction::Start, credential).await
    }

    pub async fn request_stop(&self, credential: Option<&str>) -> ApiResult<MessageResponse> {
        self.request(ServerAction::Stop, credential).await
    }

    /// The gate runs before anything touches the infrastructure.
    async fn request(
        &self,
        action: ServerAction,
        credential: Option<&str>,
    ) -> ApiResult<MessageResponse> {
        self.gate.check(credential)?;

        match self.controller.apply(action).await? {
            TransitionOutcome::Accepted { target, .. } => {
                info!("{} accepted, converging to {}", action, target);
                Ok(MessageResponse::new(accepted_message(action)))
            }
            TransitionOutcome::Rejected(rejection) => {
                Err(ApiError::invalid_transition(rejection.message()))
            }
        }
    }
}

fn accepted_message(action: ServerAction) -> &'static str {
    match action {
        ServerAction::Start => "Server is starting up",
        ServerAction::Stop => "Server is stopping",
    }
}
