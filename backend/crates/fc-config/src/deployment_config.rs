use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ENABLE_RCON, DEFAULT_IMAGE_TAG, DEFAULT_INSTANCE_TYPE,
    DEFAULT_KEY_PAIR_NAME, DEFAULT_SPOT_PRICE,
};

use std::net::IpAddr;

use serde::Deserialize;

/// Values fed into the stack template parameters on start/stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub image_tag: String,
    /// Maximum spot bid, kept as the decimal string the template expects
    pub spot_price: String,
    pub key_pair_name: String,
    /// Address or CIDR allowed to reach the instance
    pub allowed_ip: Option<String>,
    pub hosted_zone_id: Option<String>,
    pub record_name: Option<String>,
    pub enable_rcon: bool,
    pub instance_type: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            image_tag: String::from(DEFAULT_IMAGE_TAG),
            spot_price: String::from(DEFAULT_SPOT_PRICE),
            key_pair_name: String::from(DEFAULT_KEY_PAIR_NAME),
            allowed_ip: None,
            hosted_zone_id: None,
            record_name: None,
            enable_rcon: DEFAULT_ENABLE_RCON,
            instance_type: String::from(DEFAULT_INSTANCE_TYPE),
        }
    }
}

impl DeploymentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("deployment.image_tag", &self.image_tag),
            ("deployment.key_pair_name", &self.key_pair_name),
            ("deployment.instance_type", &self.instance_type),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::deployment(format!("{} cannot be empty", name)));
            }
        }

        match self.spot_price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => {}
            _ => {
                return Err(ConfigError::deployment(format!(
                    "deployment.spot_price must be a positive decimal, got '{}'",
                    self.spot_price
                )));
            }
        }

        let allowed_ip = Self::required(
            "deployment.allowed_ip",
            "FC_DEPLOY_ALLOWED_IP",
            &self.allowed_ip,
        )?;
        if !is_ip_or_cidr(allowed_ip) {
            return Err(ConfigError::deployment(format!(
                "deployment.allowed_ip must be an IP address or CIDR block, got '{}'",
                allowed_ip
            )));
        }

        Self::required(
            "deployment.hosted_zone_id",
            "FC_DEPLOY_HOSTED_ZONE_ID",
            &self.hosted_zone_id,
        )?;
        Self::required(
            "deployment.record_name",
            "FC_DEPLOY_RECORD_NAME",
            &self.record_name,
        )?;

        Ok(())
    }

    fn required<'a>(
        name: &str,
        env_var: &str,
        value: &'a Option<String>,
    ) -> ConfigErrorResult<&'a str> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(ConfigError::deployment(format!(
                "{} is required (set {})",
                name, env_var
            ))),
        }
    }
}

fn is_ip_or_cidr(value: &str) -> bool {
    let (address, prefix) = match value.split_once('/') {
        Some((address, prefix)) => (address, Some(prefix)),
        None => (value, None),
    };

    let Ok(ip) = address.parse::<IpAddr>() else {
        return false;
    };

    let max_prefix = if ip.is_ipv4() { 32 } else { 128 };
    match prefix {
        None => true,
        Some(p) => p.parse::<u8>().is_ok_and(|p| p <= max_prefix),
    }
}
