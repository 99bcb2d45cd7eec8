//! fc - Factorio server lifecycle CLI
//!
//! # Examples
//!
//! ```bash
//! # Current status
//! fc status --pretty
//!
//! # Start and follow until the server is up
//! FC_PASSWORD=... fc start --watch
//!
//! # Who is online
//! FC_RCON_PASSWORD=... fc game players --host play.example.com
//! ```

mod cli;
mod commands;
mod game_commands;
mod logger;

use crate::{
    cli::Cli,
    commands::{ActionArgs, Commands},
    game_commands::GameCommands,
};

use fc_cli::{ActionReply, Client, Poller};
use fc_core::{ServerAction, ServerStatus};
use fc_game::{PlayerLogMonitor, RconClient, announce_shutdown, online_players};

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, warn};
use serde_json::{Value, json};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The monitor reports joins and leaves through the log
    let level = match cli.command {
        Commands::Game {
            action: GameCommands::Monitor { .. },
        } => (*cli.log_level).max(LevelFilter::Info),
        _ => *cli.log_level,
    };
    if let Err(e) = logger::initialize(level) {
        eprintln!("Error initializing logger: {}", e);
    }

    let client = Client::new(&cli.server);
    let pretty = cli.pretty;

    let result: Result<Value, Box<dyn Error>> = match cli.command {
        Commands::Status => client
            .status()
            .await
            .map(|status| json!({ "status": status }))
            .map_err(Into::into),
        Commands::Start(args) => run_action(&client, ServerAction::Start, args, pretty).await,
        Commands::Stop(args) => run_action(&client, ServerAction::Stop, args, pretty).await,
        Commands::Watch { interval } => {
            let last = watch(&client, Poller::new(interval), None, pretty).await;
            Ok(json!({ "status": last }))
        }
        Commands::Game { action } => run_game(action).await,
    };

    match result {
        Ok(value) => match render(&value, pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_action(
    client: &Client,
    action: ServerAction,
    args: ActionArgs,
    pretty: bool,
) -> Result<Value, Box<dyn Error>> {
    let reply: ActionReply = match action {
        ServerAction::Start => client.start(args.password.as_deref()).await?,
        ServerAction::Stop => client.stop(args.password.as_deref()).await?,
    };

    if !args.watch {
        return Ok(serde_json::to_value(&reply)?);
    }

    // Print the reply now; the final status follows once the poller settles
    println!("{}", render(&serde_json::to_value(&reply)?, pretty)?);
    let assumed = reply.accepted.then(|| action.target_status());
    let last = watch(client, Poller::new(args.interval), assumed, pretty).await;
    Ok(json!({ "status": last }))
}

/// Poll until steady or Ctrl+C, printing every status change.
async fn watch(
    client: &Client,
    mut poller: Poller,
    assumed: Option<ServerStatus>,
    pretty: bool,
) -> Option<ServerStatus> {
    let first = match assumed {
        Some(status) => poller.assume(status),
        None => poller.start(),
    };

    let mut shown: Option<ServerStatus> = None;
    let report = |result: &fc_cli::CliClientResult<ServerStatus>| match result {
        Ok(status) if shown != Some(*status) => {
            shown = Some(*status);
            if let Ok(line) = render(&json!({ "status": status }), pretty) {
                eprintln!("{}", line);
            }
        }
        Ok(_) => {}
        Err(e) => warn!("Status read failed: {}", e),
    };

    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    poller.run(client, first, report, cancel).await
}

async fn run_game(action: GameCommands) -> Result<Value, Box<dyn Error>> {
    match action {
        GameCommands::Players(rcon) => {
            let mut client =
                RconClient::connect(rcon.addr(), &rcon.rcon_password, rcon.timeout).await?;
            Ok(serde_json::to_value(online_players(&mut client).await?)?)
        }
        GameCommands::AnnounceShutdown { rcon, message } => {
            let mut client =
                RconClient::connect(rcon.addr(), &rcon.rcon_password, rcon.timeout).await?;
            Ok(serde_json::to_value(announce_shutdown(&mut client, &message).await?)?)
        }
        GameCommands::Monitor {
            log_file,
            state_file,
        } => {
            let monitor = PlayerLogMonitor::open(log_file, state_file).await;
            let roster = monitor
                .run(async {
                    if tokio::signal::ctrl_c().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                })
                .await;
            Ok(json!({ "players": roster.players() }))
        }
    }
}

fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
