use crate::cluster_signal;

use fc_core::{ClusterGateway, ClusterSignal, CoreError, Result as CoreErrorResult};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::error::DisplayErrorContext;
use log::debug;
use tracing::instrument;

pub struct EcsCluster {
    client: Client,
    cluster_name: String,
}

impl EcsCluster {
    pub fn new(sdk_config: &SdkConfig, cluster_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            cluster_name: cluster_name.into(),
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }
}

#[async_trait]
impl ClusterGateway for EcsCluster {
    #[instrument(skip(self), fields(cluster = %self.cluster_name))]
    async fn describe(&self) -> CoreErrorResult<Option<ClusterSignal>> {
        let output = self
            .client
            .describe_clusters()
            .clusters(&self.cluster_name)
            .send()
            .await
            .map_err(|e| CoreError::query(DisplayErrorContext(&e).to_string()))?;

        // ECS reports unknown clusters under failures, not as an error
        for failure in output.failures() {
            debug!(
                "Cluster lookup failure for {:?}: {:?}",
                failure.arn(),
                failure.reason()
            );
        }

        Ok(output
            .clusters()
            .first()
            .map(|cluster| cluster_signal(cluster.running_tasks_count())))
    }
}
