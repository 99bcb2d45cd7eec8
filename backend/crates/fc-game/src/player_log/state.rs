use crate::{GameError, Result, Roster};

use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// On-disk form of the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub players: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl RosterSnapshot {
    pub fn of(roster: &Roster, at: DateTime<Utc>) -> Self {
        Self {
            players: roster.players(),
            last_updated: at,
        }
    }

    /// Restore a roster. A missing file is an empty roster; so is a corrupt one.
    pub async fn restore(path: &Path) -> Roster {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Roster::default(),
            Err(e) => {
                warn!("Error loading player state {}: {}", path.display(), e);
                return Roster::default();
            }
        };

        match serde_json::from_str::<RosterSnapshot>(&contents) {
            Ok(snapshot) => Roster::from_players(snapshot.players),
            Err(e) => {
                warn!("Discarding corrupt player state {}: {}", path.display(), e);
                Roster::default()
            }
        }
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GameError::state(path, e.to_string()))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| GameError::state(path, e.to_string()))
    }
}
