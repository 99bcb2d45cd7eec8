use crate::DeploymentStatus;

#[test]
fn test_update_in_progress_is_recognised() {
    let status = DeploymentStatus::from_raw("UPDATE_IN_PROGRESS");
    assert_eq!(status, DeploymentStatus::UpdateInProgress);
    assert!(status.is_update_in_progress());
}

#[test]
fn test_other_statuses_are_steady_and_kept_verbatim() {
    for raw in [
        "CREATE_COMPLETE",
        "UPDATE_COMPLETE",
        "UPDATE_ROLLBACK_COMPLETE",
        "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS",
    ] {
        let status = DeploymentStatus::from_raw(raw);
        assert!(!status.is_update_in_progress(), "{raw} should be steady");
        assert_eq!(status.as_str(), raw);
    }
}
