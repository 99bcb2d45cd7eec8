mod server;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with FC_CONFIG_DIR pointing at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("FC_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Settings with no default, supplied through the environment
pub(crate) fn required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("FC_AUTH_PASSWORD", "hunter2"),
        EnvGuard::set("FC_DEPLOY_ALLOWED_IP", "203.0.113.7/32"),
        EnvGuard::set("FC_DEPLOY_HOSTED_ZONE_ID", "Z0123456789ABC"),
        EnvGuard::set("FC_DEPLOY_RECORD_NAME", "factorio.example.com"),
    ]
}

/// Clear overrides that would otherwise leak in from the host environment
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "FC_SERVER_HOST",
        "FC_SERVER_PORT",
        "FC_AUTH_PASSWORD",
        "FC_AWS_REGION",
        "FC_AWS_STACK_NAME",
        "FC_AWS_CLUSTER_NAME",
        "FC_AWS_ACCESS_KEY_ID",
        "FC_AWS_SECRET_ACCESS_KEY",
        "FC_DEPLOY_IMAGE_TAG",
        "FC_DEPLOY_SPOT_PRICE",
        "FC_DEPLOY_KEY_PAIR_NAME",
        "FC_DEPLOY_ALLOWED_IP",
        "FC_DEPLOY_HOSTED_ZONE_ID",
        "FC_DEPLOY_RECORD_NAME",
        "FC_DEPLOY_ENABLE_RCON",
        "FC_DEPLOY_INSTANCE_TYPE",
        "FC_LOG_LEVEL",
        "FC_LOG_COLORED",
        "FC_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
