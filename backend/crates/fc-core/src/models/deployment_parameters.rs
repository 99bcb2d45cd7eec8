/// Deployment-specific values fed into the stack parameter sets.
///
/// These are configuration, not controller logic; the controller only
/// decides which of them each action submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    pub image_tag: String,
    pub spot_price: String,
    pub key_pair_name: String,
    /// Source address allowed through the security group (IP or CIDR)
    pub allowed_ip: String,
    pub hosted_zone_id: String,
    /// DNS record pointed at the server
    pub record_name: String,
    pub enable_rcon: bool,
    pub instance_type: String,
}
