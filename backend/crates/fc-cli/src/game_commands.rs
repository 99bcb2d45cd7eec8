use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};

pub(crate) const DEFAULT_SHUTDOWN_MESSAGE: &str =
    "Server about to shut down because of spot instance pricing";

#[derive(Subcommand)]
pub(crate) enum GameCommands {
    /// List online players
    Players(RconArgs),

    /// Warn players and save the map before the host goes away
    AnnounceShutdown {
        #[command(flatten)]
        rcon: RconArgs,

        #[arg(long, default_value = DEFAULT_SHUTDOWN_MESSAGE)]
        message: String,
    },

    /// Follow the server log and keep the online roster in a JSON file
    Monitor {
        #[arg(long, default_value = "/var/log/factorio/factorio.log")]
        log_file: PathBuf,

        #[arg(long, default_value = "/var/log/factorio/player_state.json")]
        state_file: PathBuf,
    },
}

#[derive(Args)]
pub(crate) struct RconArgs {
    #[arg(long, env = "FC_RCON_HOST", default_value = "127.0.0.1")]
    pub(crate) host: String,

    #[arg(long, env = "FC_RCON_PORT", default_value_t = 27015)]
    pub(crate) port: u16,

    #[arg(long, env = "FC_RCON_PASSWORD", hide_env_values = true)]
    pub(crate) rcon_password: String,

    /// Connect/read/write timeout
    #[arg(long, default_value = "5s", value_parser = humantime::parse_duration)]
    pub(crate) timeout: Duration,
}

impl RconArgs {
    pub(crate) fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
