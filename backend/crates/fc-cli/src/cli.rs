use crate::commands::Commands;

use clap::Parser;

pub(crate) const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "fc")]
#[command(about = "Start, stop, and watch the Factorio server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Lifecycle API URL
    #[arg(long, global = true, env = "FC_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Diagnostic log level (written to stderr)
    #[arg(long, global = true, env = "FC_CLI_LOG_LEVEL", default_value = "warn")]
    pub(crate) log_level: fc_config::LogLevel,
}
