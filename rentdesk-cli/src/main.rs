//! Main entry point for the RentDesk CLI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::ClientConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod commands;
mod token_store;

use commands::payments::StatsArgs;
use commands::session::LoginArgs;

/// RentDesk CLI
#[derive(Parser)]
#[command(name = "rentdesk")]
#[command(about = "Command-line interface for RentDesk", long_about = None)]
struct Cli {
    /// Path to the configuration file (yaml or json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration file and environment
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the RentDesk CLI
#[derive(Subcommand)]
enum Commands {
    /// Manage the stored session
    #[command(subcommand)]
    Session(SessionCommand),

    /// Inspect payments
    #[command(subcommand)]
    Payments(PaymentsCommand),

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(long, short)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Sign in with a token or with email and password
    Login(LoginArgs),
    /// Resolve the stored token and show the session
    Status,
    /// Forget the stored token
    Logout,
}

#[derive(Subcommand)]
enum PaymentsCommand {
    /// Show payment totals by status
    Stats(StatsArgs),
}

fn initialize_tracing(level: &str) {
    let default_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RENTDESK_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Commands::Config { format } = &cli.command {
        initialize_tracing("warn");
        let format = format.as_deref().unwrap_or("yaml");
        return commands::config::generate_config(format);
    }

    let config = ClientConfig::load_config(cli.config, cli.api_url.as_deref())
        .context("failed to load configuration")?;
    initialize_tracing(&config.log_level);

    match cli.command {
        Commands::Session(SessionCommand::Login(args)) => {
            commands::session::login(&config, args).await
        }
        Commands::Session(SessionCommand::Status) => commands::session::status(&config).await,
        Commands::Session(SessionCommand::Logout) => commands::session::logout(&config),
        Commands::Payments(PaymentsCommand::Stats(args)) => {
            commands::payments::stats(&config, args).await
        }
        Commands::Config { .. } => Ok(()),
    }
}
