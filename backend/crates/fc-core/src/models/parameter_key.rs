/// Every stack template parameter this controller submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    ServerState,
    FactorioImageTag,
    SpotPrice,
    KeyPairName,
    YourIp,
    HostedZoneId,
    RecordName,
    EnableRcon,
    InstanceType,
}

impl ParameterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerState => "ServerState",
            Self::FactorioImageTag => "FactorioImageTag",
            Self::SpotPrice => "SpotPrice",
            Self::KeyPairName => "KeyPairName",
            Self::YourIp => "YourIp",
            Self::HostedZoneId => "HostedZoneId",
            Self::RecordName => "RecordName",
            Self::EnableRcon => "EnableRcon",
            Self::InstanceType => "InstanceType",
        }
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
