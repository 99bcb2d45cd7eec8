use crate::{
    CoreError, DeploymentParameters, ParameterKey, Result as CoreErrorResult, ServerAction,
};

use std::panic::Location;

use error_location::ErrorLocation;

/// The complete parameter set submitted with a stack update.
///
/// The stack subsystem replaces the whole parameter set on every update,
/// so each action carries its own full list. A set with a blank value is
/// never constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredParameterSet {
    action: ServerAction,
    entries: Vec<(ParameterKey, String)>,
}

impl DesiredParameterSet {
    /// Build the full parameter set for `action`.
    ///
    /// # Errors
    /// `CoreError::IncompleteParameters` naming the first key whose value is blank.
    #[track_caller]
    pub fn for_action(
        action: ServerAction,
        parameters: &DeploymentParameters,
    ) -> CoreErrorResult<Self> {
        let server_state = action.desired_state().as_str().to_string();

        let entries = match action {
            ServerAction::Start => vec![
                (ParameterKey::ServerState, server_state),
                (ParameterKey::FactorioImageTag, parameters.image_tag.clone()),
                (ParameterKey::SpotPrice, parameters.spot_price.clone()),
            ],
            ServerAction::Stop => vec![
                (ParameterKey::ServerState, server_state),
                (ParameterKey::FactorioImageTag, parameters.image_tag.clone()),
                (ParameterKey::KeyPairName, parameters.key_pair_name.clone()),
                (ParameterKey::YourIp, parameters.allowed_ip.clone()),
                (ParameterKey::HostedZoneId, parameters.hosted_zone_id.clone()),
                (ParameterKey::RecordName, parameters.record_name.clone()),
                (ParameterKey::EnableRcon, parameters.enable_rcon.to_string()),
                (ParameterKey::InstanceType, parameters.instance_type.clone()),
            ],
        };

        if let Some((key, _)) = entries.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::IncompleteParameters {
                key: *key,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { action, entries })
    }

    pub fn action(&self) -> ServerAction {
        self.action
    }

    pub fn entries(&self) -> &[(ParameterKey, String)] {
        &self.entries
    }

    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = ParameterKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
