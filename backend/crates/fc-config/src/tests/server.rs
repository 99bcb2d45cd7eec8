use crate::ServerConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_server_config_when_validate_then_ok() {
    let config = ServerConfig::default();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_port_zero_when_validate_then_ok() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_privileged_port_when_validate_then_error() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_host_when_validate_then_error() {
    let config = ServerConfig {
        host: "  ".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}
