use crate::tests::fakes::deployment_parameters;
use crate::{CoreError, DesiredParameterSet, ParameterKey, ServerAction};

use googletest::assert_that;
use googletest::prelude::{anything, ok};

#[test]
fn given_start_when_building_then_only_run_parameters_are_included() {
    // Given
    let parameters = deployment_parameters();

    // When
    let set = DesiredParameterSet::for_action(ServerAction::Start, &parameters).unwrap();

    // Then
    let keys: Vec<ParameterKey> = set.keys().collect();
    assert_eq!(
        keys,
        vec![
            ParameterKey::ServerState,
            ParameterKey::FactorioImageTag,
            ParameterKey::SpotPrice,
        ]
    );
    assert_eq!(set.get(ParameterKey::ServerState), Some("Running"));
    assert_eq!(set.get(ParameterKey::SpotPrice), Some("0.08"));
    assert_eq!(set.get(ParameterKey::HostedZoneId), None);
}

#[test]
fn given_stop_when_building_then_reachability_parameters_are_included() {
    // Given
    let parameters = deployment_parameters();

    // When
    let set = DesiredParameterSet::for_action(ServerAction::Stop, &parameters).unwrap();

    // Then
    let keys: Vec<ParameterKey> = set.keys().collect();
    assert_eq!(
        keys,
        vec![
            ParameterKey::ServerState,
            ParameterKey::FactorioImageTag,
            ParameterKey::KeyPairName,
            ParameterKey::YourIp,
            ParameterKey::HostedZoneId,
            ParameterKey::RecordName,
            ParameterKey::EnableRcon,
            ParameterKey::InstanceType,
        ]
    );
    assert_eq!(set.get(ParameterKey::ServerState), Some("Stopped"));
    assert_eq!(set.get(ParameterKey::YourIp), Some("203.0.113.7"));
    assert_eq!(set.get(ParameterKey::EnableRcon), Some("true"));
    assert_eq!(set.get(ParameterKey::SpotPrice), None);
}

#[test]
fn given_blank_hosted_zone_when_building_stop_then_incomplete_error_names_key() {
    // Given
    let mut parameters = deployment_parameters();
    parameters.hosted_zone_id = "  ".to_string();

    // When
    let result = DesiredParameterSet::for_action(ServerAction::Stop, &parameters);

    // Then
    assert!(matches!(
        result,
        Err(CoreError::IncompleteParameters {
            key: ParameterKey::HostedZoneId,
            ..
        })
    ));
}

#[test]
fn given_blank_hosted_zone_when_building_start_then_ok() {
    // Given
    let mut parameters = deployment_parameters();
    parameters.hosted_zone_id = String::new();

    // When
    let result = DesiredParameterSet::for_action(ServerAction::Start, &parameters);

    // Then
    assert_that!(result, ok(anything()));
}
