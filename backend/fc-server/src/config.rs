//! Conversions from loaded configuration into the types the lower crates take.

use fc_aws::AwsSettings;
use fc_config::{AwsConfig, DeploymentConfig};
use fc_core::DeploymentParameters;

/// Missing optional values become blank; the parameter set rejects blanks before submitting.
pub fn deployment_parameters(deployment: &DeploymentConfig) -> DeploymentParameters {
    DeploymentParameters {
        image_tag: deployment.image_tag.clone(),
        spot_price: deployment.spot_price.trim().to_string(),
        key_pair_name: deployment.key_pair_name.clone(),
        allowed_ip: deployment.allowed_ip.clone().unwrap_or_default(),
        hosted_zone_id: deployment.hosted_zone_id.clone().unwrap_or_default(),
        record_name: deployment.record_name.clone().unwrap_or_default(),
        enable_rcon: deployment.enable_rcon,
        instance_type: deployment.instance_type.clone(),
    }
}

pub fn aws_settings(aws: &AwsConfig) -> AwsSettings {
    AwsSettings {
        region: aws.region.clone(),
        stack_name: aws.stack_name.clone(),
        cluster_name: aws.cluster_name.clone(),
        access_key_id: aws.access_key_id.clone(),
        secret_access_key: aws.secret_access_key.clone(),
    }
}
