use crate::{DesiredState, Rejection, ServerAction, ServerStatus};

use std::str::FromStr;

#[test]
fn test_server_status_as_str() {
    assert_eq!(ServerStatus::Stopped.as_str(), "stopped");
    assert_eq!(ServerStatus::Working.as_str(), "working");
    assert_eq!(ServerStatus::Running.as_str(), "running");
}

#[test]
fn test_server_status_from_str() {
    assert_eq!(
        ServerStatus::from_str("running").unwrap(),
        ServerStatus::Running
    );
    assert_eq!(
        ServerStatus::from_str("working").unwrap(),
        ServerStatus::Working
    );
    assert!(ServerStatus::from_str("Running").is_err());
    assert!(ServerStatus::from_str("paused").is_err());
}

#[test]
fn test_server_status_serializes_lowercase() {
    let json = serde_json::to_string(&ServerStatus::Working).unwrap();
    assert_eq!(json, "\"working\"");

    let parsed: ServerStatus = serde_json::from_str("\"stopped\"").unwrap();
    assert_eq!(parsed, ServerStatus::Stopped);
}

#[test]
fn test_only_working_is_transient() {
    assert!(ServerStatus::Stopped.is_steady());
    assert!(ServerStatus::Running.is_steady());
    assert!(!ServerStatus::Working.is_steady());
}

#[test]
fn test_action_targets() {
    assert_eq!(ServerAction::Start.target_status(), ServerStatus::Running);
    assert_eq!(ServerAction::Stop.target_status(), ServerStatus::Stopped);
    assert_eq!(ServerAction::Start.desired_state(), DesiredState::Running);
    assert_eq!(ServerAction::Stop.desired_state(), DesiredState::Stopped);
}

#[test]
fn test_desired_state_round_trips_template_values() {
    assert_eq!(DesiredState::from_str("Running").unwrap(), DesiredState::Running);
    assert_eq!(DesiredState::Stopped.as_str(), "Stopped");
    assert!(DesiredState::from_str("running").is_err());
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        Rejection::for_action(ServerAction::Start).message(),
        "already running"
    );
    assert_eq!(
        Rejection::for_action(ServerAction::Stop).message(),
        "already stopped"
    );
}
