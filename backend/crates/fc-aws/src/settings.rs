use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cloudformation::config::Credentials;
use log::info;

const CREDENTIALS_PROVIDER_NAME: &str = "fc-config";

/// Where the controller's resources live and how to reach them
#[derive(Clone)]
pub struct AwsSettings {
    pub region: String,
    pub stack_name: String,
    pub cluster_name: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl std::fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSettings")
            .field("region", &self.region)
            .field("stack_name", &self.stack_name)
            .field("cluster_name", &self.cluster_name)
            .field("static_credentials", &self.static_credentials().is_some())
            .finish()
    }
}

impl AwsSettings {
    pub(crate) fn static_credentials(&self) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key), Some(secret)) => Some(Credentials::new(
                key,
                secret,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            )),
            _ => None,
        }
    }
}

/// Build the shared SDK config. Static keys win over the default provider chain.
pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()));

    match settings.static_credentials() {
        Some(credentials) => {
            info!("Using static AWS credentials from configuration");
            loader = loader.credentials_provider(credentials);
        }
        None => info!("Using the default AWS credential provider chain"),
    }

    loader.load().await
}
