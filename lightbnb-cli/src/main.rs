//! lightbnb CLI - query and update the LightBnB database from the shell
//!
//! - `user get|add`: look up users by email or id, register users
//! - `reservations`: a guest's past stays
//! - `properties search|add`: filtered property search, new listings
//! - `config show|path`: inspect connection settings

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use lightbnb_store::{DbConfig, RentalDataStore};

mod commands;
mod output;
mod tracing_setup;

use commands::Context;
use output::Format;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and update the LightBnB rental database"
)]
struct Cli {
    /// Config file (default: ~/.lightbnb/config.toml)
    #[arg(long, global = true, env = "LIGHTBNB_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or register users
    User(commands::user::UserArgs),
    /// List a guest's past reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search or add property listings
    Properties(commands::properties::PropertiesArgs),
    /// Inspect database configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let format = Format::from_flag(cli.json);
    let config_path = cli.config.as_deref();

    let code = match cli.command {
        Commands::Config(args) => {
            commands::run_config(args, config_path, cli.json)?;
            ExitCode::SUCCESS
        }
        Commands::User(args) => commands::run_user(args, &connect(config_path, format)?).await?,
        Commands::Reservations(args) => {
            commands::run_reservations(args, &connect(config_path, format)?).await?
        }
        Commands::Properties(args) => {
            commands::run_properties(args, &connect(config_path, format)?).await?
        }
    };

    Ok(code)
}

fn connect(config_path: Option<&std::path::Path>, format: Format) -> Result<Context> {
    let config = DbConfig::load(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    Ok(Context {
        store: RentalDataStore::from_config(&config),
        format,
    })
}
