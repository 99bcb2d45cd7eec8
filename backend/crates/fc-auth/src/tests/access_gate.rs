use crate::{AccessGate, AuthError};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

const SECRET: &str = "correct horse battery staple";

#[test]
fn given_matching_password_when_authorized_then_true() {
    let gate = AccessGate::new(SECRET).unwrap();

    assert!(gate.authorize(Some(SECRET)));
}

#[test]
fn given_wrong_password_when_authorized_then_false() {
    let gate = AccessGate::new(SECRET).unwrap();

    assert!(!gate.authorize(Some("correct horse battery stapler")));
    assert!(!gate.authorize(Some("correct horse battery stapl")));
    assert!(!gate.authorize(Some("CORRECT HORSE BATTERY STAPLE")));
}

#[test]
fn given_absent_or_empty_password_when_authorized_then_false() {
    let gate = AccessGate::new(SECRET).unwrap();

    assert!(!gate.authorize(None));
    assert!(!gate.authorize(Some("")));
}

#[test]
fn given_prefix_of_secret_when_authorized_then_false() {
    let gate = AccessGate::new(SECRET).unwrap();

    assert!(!gate.authorize(Some("correct")));
}

#[test]
fn given_wrong_password_when_checked_then_invalid_password_error() {
    let gate = AccessGate::new(SECRET).unwrap();

    let result = gate.check(Some("nope"));

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert!(matches!(error, AuthError::InvalidPassword { .. }));
    assert_eq!(error.public_message(), "Invalid password");
}

#[test]
fn given_matching_password_when_checked_then_ok() {
    let gate = AccessGate::new(SECRET).unwrap();

    assert_that!(gate.check(Some(SECRET)), ok(anything()));
}

#[test]
fn given_blank_secret_when_created_then_missing_secret_error() {
    let result = AccessGate::new("   ");

    assert!(matches!(result, Err(AuthError::MissingSecret { .. })));
}

#[test]
fn given_gate_when_debug_formatted_then_secret_is_redacted() {
    let gate = AccessGate::new(SECRET).unwrap();

    let debug = format!("{:?}", gate);

    assert!(!debug.contains(SECRET));
    assert!(debug.contains("redacted"));
}
