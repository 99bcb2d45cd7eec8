//! Host-side tooling for the running game server: RCON commands and the
//! player join/leave monitor.

pub mod commands;
pub mod error;
pub mod player_log;
pub mod rcon;

#[cfg(test)]
mod tests;

pub use commands::{PlayerReport, ShutdownNotice, announce_shutdown, online_players};
pub use error::{GameError, Result};
pub use player_log::monitor::PlayerLogMonitor;
pub use player_log::roster::{Roster, RosterEvent};
pub use player_log::state::RosterSnapshot;
pub use rcon::client::RconClient;
pub use rcon::packet::RconPacket;
