//! One-shot RCON commands run against the live server.

use crate::{RconClient, Result};

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

const ONLINE_PLAYERS_COMMAND: &str = "/p o";
const SAVE_COMMAND: &str = "/server-save";

/// Raw `/p o` reply stamped with when it was taken
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub last_updated: String,
}

impl PlayerReport {
    pub fn new(status: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            status,
            timestamp,
            last_updated: timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

pub async fn online_players(client: &mut RconClient) -> Result<PlayerReport> {
    let status = client.execute(ONLINE_PLAYERS_COMMAND).await?;
    Ok(PlayerReport::new(status, Utc::now()))
}

#[derive(Debug, Clone, Serialize)]
pub struct ShutdownNotice {
    pub message: String,
    pub save_reply: String,
}

/// Warn connected players, then save the map.
pub async fn announce_shutdown(client: &mut RconClient, message: &str) -> Result<ShutdownNotice> {
    client.execute(message).await?;
    info!("Shutdown announced: {}", message);

    let save_reply = client.execute(SAVE_COMMAND).await?;
    info!("Save requested: {}", save_reply.trim());

    Ok(ShutdownNotice {
        message: message.to_string(),
        save_reply,
    })
}
