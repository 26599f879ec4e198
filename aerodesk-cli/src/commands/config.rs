//! Configuration inspection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use aerodesk_core::AerodeskConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration (file + environment), secrets masked
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", AerodeskConfig::config_path().display());
        }
        ConfigCommand::Show => {
            let config = AerodeskConfig::load().context("Failed to load configuration")?;
            let rendered = toml::to_string_pretty(&config.redacted())
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
