#![allow(dead_code)]

//! Test infrastructure for fc-server API tests

use fc_auth::AccessGate;
use fc_core::{
    ClusterGateway, ClusterSignal, CoreError, DeploymentParameters, DeploymentStatus,
    DesiredParameterSet, DesiredState, LifecycleController, Result as CoreErrorResult,
    StackGateway, StackSignal, SubmissionReceipt,
};
use fc_server::{AppState, LifecycleService, build_router};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;

pub const PASSWORD: &str = "correct-horse";
pub const STACK_ID: &str = "arn:aws:cloudformation:us-east-1:123456789012:stack/factorio/abc";

/// In-memory stack: a submission flips it to UPDATE_IN_PROGRESS
pub struct FakeStack {
    signal: Mutex<Option<StackSignal>>,
    submissions: Mutex<Vec<DesiredParameterSet>>,
}

impl FakeStack {
    pub fn settled(desired: DesiredState) -> Self {
        Self::with_signal(Some(StackSignal {
            deployment_status: DeploymentStatus::from_raw("UPDATE_COMPLETE"),
            desired_state: Some(desired),
        }))
    }

    pub fn updating(desired: DesiredState) -> Self {
        Self::with_signal(Some(StackSignal {
            deployment_status: DeploymentStatus::UpdateInProgress,
            desired_state: Some(desired),
        }))
    }

    pub fn missing() -> Self {
        Self::with_signal(None)
    }

    fn with_signal(signal: Option<StackSignal>) -> Self {
        Self {
            signal: Mutex::new(signal),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn submissions(&self) -> Vec<DesiredParameterSet> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl StackGateway for FakeStack {
    async fn describe(&self) -> CoreErrorResult<StackSignal> {
        self.signal
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CoreError::not_found("factorio"))
    }

    async fn submit(&self, parameters: &DesiredParameterSet) -> CoreErrorResult<SubmissionReceipt> {
        let mut signal = self.signal.lock().unwrap();
        let Some(current) = signal.as_mut() else {
            return Err(CoreError::submission("Stack with id factorio does not exist"));
        };
        current.deployment_status = DeploymentStatus::UpdateInProgress;
        current.desired_state = Some(parameters.action().desired_state());

        self.submissions.lock().unwrap().push(parameters.clone());
        Ok(SubmissionReceipt::Submitted {
            stack_id: STACK_ID.to_string(),
        })
    }
}

pub struct FakeCluster {
    running_tasks: Option<u32>,
}

impl FakeCluster {
    pub fn with_tasks(running_tasks: u32) -> Self {
        Self {
            running_tasks: Some(running_tasks),
        }
    }
}

#[async_trait]
impl ClusterGateway for FakeCluster {
    async fn describe(&self) -> CoreErrorResult<Option<ClusterSignal>> {
        Ok(self.running_tasks.map(|running_task_count| ClusterSignal {
            running_task_count,
        }))
    }
}

pub fn deployment_parameters() -> DeploymentParameters {
    DeploymentParameters {
        image_tag: "stable".to_string(),
        spot_price: "0.08".to_string(),
        key_pair_name: "factorio-key-pair".to_string(),
        allowed_ip: "203.0.113.7/32".to_string(),
        hosted_zone_id: "Z0123456789ABC".to_string(),
        record_name: "factorio.example.com".to_string(),
        enable_rcon: true,
        instance_type: "r6in.large".to_string(),
    }
}

/// Router over the fakes, plus the stack handle for asserting submissions
pub fn create_test_app(stack: FakeStack, running_tasks: u32) -> (Router, Arc<FakeStack>) {
    let stack = Arc::new(stack);
    let controller = LifecycleController::new(
        stack.clone(),
        Arc::new(FakeCluster::with_tasks(running_tasks)),
        deployment_parameters(),
    );
    let gate = AccessGate::new(PASSWORD).unwrap();
    let app = build_router(AppState::new(LifecycleService::new(controller, gate)));
    (app, stack)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
