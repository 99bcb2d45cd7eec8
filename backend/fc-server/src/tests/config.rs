use crate::config::{aws_settings, deployment_parameters};

use fc_config::{AwsConfig, DeploymentConfig};

#[test]
fn given_complete_deployment_config_when_converted_then_values_carried_over() {
    let deployment = DeploymentConfig {
        spot_price: " 0.12 ".to_string(),
        allowed_ip: Some("203.0.113.7/32".to_string()),
        hosted_zone_id: Some("Z0123456789ABC".to_string()),
        record_name: Some("factorio.example.com".to_string()),
        ..Default::default()
    };

    let parameters = deployment_parameters(&deployment);

    assert_eq!(parameters.spot_price, "0.12");
    assert_eq!(parameters.allowed_ip, "203.0.113.7/32");
    assert_eq!(parameters.instance_type, "r6in.large");
    assert!(parameters.enable_rcon);
}

#[test]
fn given_unset_optional_values_when_converted_then_blank() {
    let parameters = deployment_parameters(&DeploymentConfig::default());

    assert!(parameters.allowed_ip.is_empty());
    assert!(parameters.record_name.is_empty());
}

#[test]
fn given_aws_config_when_converted_then_names_and_keys_carried_over() {
    let aws = AwsConfig {
        stack_name: "boys-factorio".to_string(),
        access_key_id: Some("AKIAEXAMPLE".to_string()),
        secret_access_key: Some("secret".to_string()),
        ..Default::default()
    };

    let settings = aws_settings(&aws);

    assert_eq!(settings.stack_name, "boys-factorio");
    assert_eq!(settings.cluster_name, "factorio-cluster");
    assert_eq!(settings.access_key_id.as_deref(), Some("AKIAEXAMPLE"));
}
