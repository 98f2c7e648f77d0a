//! Cropflow - greenhouse insights server
//!
//! # Usage
//!
//! ```bash
//! # Run the server (default)
//! cropflow
//! cropflow --config configs/cropflow.toml
//!
//! # Run with demo records seeded
//! cropflow serve --sample
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cropflow_config::{Config, LogFormat};

/// Cropflow - greenhouse insights server
#[derive(Parser, Debug)]
#[command(name = "cropflow")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server
    Serve(cmd::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = cli
        .log_level
        .unwrap_or_else(|| config.log.level.as_str().to_string());
    init_logging(&level, config.log.format)?;

    match cli.command {
        Some(Command::Serve(args)) => cmd::serve::run(args, config).await,
        // No subcommand: serve with defaults
        None => cmd::serve::run(cmd::serve::ServeArgs::default(), config).await,
    }
}

fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Console => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .try_init()?;
        }
    }
    Ok(())
}
