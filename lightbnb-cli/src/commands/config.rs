//! Config commands - inspect the effective database configuration

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use lightbnb_store::DbConfig;
use serde::Serialize;
use std::path::Path;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (password redacted)
    Show,
    /// Show the default config file path
    Path,
}

/// Wrapper so `show` prints the same `[database]` layout the file uses
#[derive(Serialize)]
struct ConfigView {
    database: DbConfig,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&Path>, json: bool) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = DbConfig::load(config_path).context("failed to load configuration")?;
            let view = ConfigView {
                database: config.redacted(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", toml::to_string_pretty(&view)?);
            }
        }
        ConfigCommand::Path => match DbConfig::default_path() {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("could not determine home directory"),
        },
    }
    Ok(())
}
