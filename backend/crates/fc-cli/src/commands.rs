use crate::game_commands::GameCommands;

use std::time::Duration;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the current server status
    Status,

    /// Start the server
    Start(ActionArgs),

    /// Stop the server
    Stop(ActionArgs),

    /// Poll the status until it settles
    Watch {
        #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
        interval: Duration,
    },

    /// Commands run against the live game server
    Game {
        #[command(subcommand)]
        action: GameCommands,
    },
}

#[derive(Args)]
pub(crate) struct ActionArgs {
    /// Shared secret
    #[arg(long, env = "FC_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,

    /// Keep polling until the server settles
    #[arg(long)]
    pub(crate) watch: bool,

    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
    pub(crate) interval: Duration,
}
