//! aerodesk CLI - airline operations back office
//!
//! - `serve`: run the HTTP API over Postgres
//! - `catalog`: inspect the schema catalog (entities, columns, DDL)
//! - `classify`: run the constraint-violation classifier on an error text
//! - `config`: show where configuration lives and what is in effect

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "aerodesk",
    author,
    version,
    about = "Airline operations back office: CRUD over flights, passengers, bookings and more",
    long_about = "Serve a JSON API for airline operations data with referential-integrity-aware \
                  error reporting, and inspect the schema catalog and violation classifier."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// List entities or show one entity's columns and foreign keys
    Catalog(commands::catalog::CatalogArgs),
    /// Classify a raw storage error message for an entity
    Classify(commands::classify::ClassifyArgs),
    /// Show configuration (path, show)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `env = ...` flags see .env values
    commands::load_dotenv();
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Catalog(args) => commands::catalog::run_catalog(args)?,
        Commands::Classify(args) => commands::classify::run_classify(args)?,
        Commands::Config(args) => commands::config::run_config(args)?,
    }
    Ok(())
}
