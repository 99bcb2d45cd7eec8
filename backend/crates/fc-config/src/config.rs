use crate::{
    AuthConfig, AwsConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DeploymentConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub aws: AwsConfig,
    pub deployment: DeploymentConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FC_CONFIG_DIR env var, else ./.fc/
    /// 2. Auto-create the config directory
    /// 3. config.toml if it exists, else defaults
    /// 4. FC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FC_CONFIG_DIR env var > ./.fc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.aws.validate()?;
        self.deployment.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute directory for log files.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  auth: {}",
            if self.auth.password.is_some() {
                "password set"
            } else {
                "password missing"
            }
        );
        info!(
            "  aws: region={}, stack={}, cluster={}, credentials={}",
            self.aws.region,
            self.aws.stack_name,
            self.aws.cluster_name,
            if self.aws.has_static_credentials() {
                "static"
            } else {
                "default chain"
            }
        );
        info!(
            "  deployment: image={}, spot_price={}, instance={}, rcon={}",
            self.deployment.image_tag,
            self.deployment.spot_price,
            self.deployment.instance_type,
            self.deployment.enable_rcon
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FC_SERVER_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_option_string("FC_AUTH_PASSWORD", &mut self.auth.password);

        // AWS
        Self::apply_env_string("FC_AWS_REGION", &mut self.aws.region);
        Self::apply_env_string("FC_AWS_STACK_NAME", &mut self.aws.stack_name);
        Self::apply_env_string("FC_AWS_CLUSTER_NAME", &mut self.aws.cluster_name);
        Self::apply_env_option_string("FC_AWS_ACCESS_KEY_ID", &mut self.aws.access_key_id);
        Self::apply_env_option_string(
            "FC_AWS_SECRET_ACCESS_KEY",
            &mut self.aws.secret_access_key,
        );

        // Deployment
        Self::apply_env_string("FC_DEPLOY_IMAGE_TAG", &mut self.deployment.image_tag);
        Self::apply_env_string("FC_DEPLOY_SPOT_PRICE", &mut self.deployment.spot_price);
        Self::apply_env_string("FC_DEPLOY_KEY_PAIR_NAME", &mut self.deployment.key_pair_name);
        Self::apply_env_option_string("FC_DEPLOY_ALLOWED_IP", &mut self.deployment.allowed_ip);
        Self::apply_env_option_string(
            "FC_DEPLOY_HOSTED_ZONE_ID",
            &mut self.deployment.hosted_zone_id,
        );
        Self::apply_env_option_string("FC_DEPLOY_RECORD_NAME", &mut self.deployment.record_name);
        Self::apply_env_bool("FC_DEPLOY_ENABLE_RCON", &mut self.deployment.enable_rcon);
        Self::apply_env_string("FC_DEPLOY_INSTANCE_TYPE", &mut self.deployment.instance_type);

        // Logging
        Self::apply_env_parse("FC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FC_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
