mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File, OpenOptions};

use radar_core::config::{self, AppConfig};
use tracing_subscriber::{prelude::*, EnvFilter};

use cli::Cli;

const LOG_FILE_NAME: &str = "game-radar.log";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(path) = config::ensure_default_config() {
        tracing::info!("wrote default config to {}", path.display());
    }
    let mut config = AppConfig::load()?;
    if let Some(output) = &cli.output {
        config = config.with_output_path(output);
    }

    cli.command.run(&config).await
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stdout);

    let (file_layer, file_error) = match open_log_file() {
        Ok(log_file) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .compact()
                .with_writer(std::sync::Mutex::new(log_file));
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Some(err) = file_error {
        tracing::warn!("Logging to stdout only: {:#}", err);
    }
}

fn open_log_file() -> Result<File> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join(LOG_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))
}
