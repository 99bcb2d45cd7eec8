use fc_auth::AccessGate;
use fc_aws::{CloudFormationStack, EcsCluster, load_sdk_config};
use fc_config::Config;
use fc_core::LifecycleController;
use fc_server::config::{aws_settings, deployment_parameters};
use fc_server::{AppState, LifecycleService, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let settings = aws_settings(&config.aws);
    let sdk_config = load_sdk_config(&settings).await;
    let stack = Arc::new(CloudFormationStack::new(&sdk_config, &settings.stack_name));
    let cluster = Arc::new(EcsCluster::new(&sdk_config, &settings.cluster_name));
    info!(
        "Managing stack {} on cluster {} in {}",
        stack.stack_name(),
        cluster.cluster_name(),
        settings.region
    );

    let controller =
        LifecycleController::new(stack, cluster, deployment_parameters(&config.deployment));
    let gate = AccessGate::new(config.auth.password.as_deref().unwrap_or_default())?;
    let app = build_router(AppState::new(LifecycleService::new(controller, gate)));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Actual address matters when port is 0
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Never resolves
            std::future::pending::<()>().await
        }
    }
}
