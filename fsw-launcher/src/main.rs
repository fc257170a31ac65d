//! fsw-launcher - starts the Face Search Web App services
//!
//! Launches the face-recognition backend, waits a fixed grace period,
//! launches the upload web server, prints the service URLs, then blocks
//! until Ctrl-C and terminates both children.

use fsw_launcher::error::{LauncherError, Result as LauncherResult};
use fsw_launcher::logger;
use fsw_launcher::supervisor::{OsSpawner, ShutdownCoordinator, Supervisor};

use std::process::ExitCode;

use fsw_config::Config;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet (config/logger errors), so
            // report on stderr unconditionally.
            eprintln!("Error starting services: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> LauncherResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir).map_err(|e| {
            LauncherError::logger(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fsw-launcher v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let shutdown = ShutdownCoordinator::new();

    // Ctrl-C trips the shutdown signal. The listener re-arms so repeated
    // interrupts during shutdown are absorbed rather than killing us.
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        loop {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received SIGINT (Ctrl+C), initiating shutdown");
                    shutdown_for_signal.trigger();
                }
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    break;
                }
            }
        }
    });

    let mut supervisor = Supervisor::new(config, OsSpawner, shutdown);
    supervisor.run().await?;

    info!("Services stopped successfully");
    Ok(())
}
