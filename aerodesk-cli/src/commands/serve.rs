//! HTTP server command
//!
//! Runs the aerodesk JSON API over a Postgres pool.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use aerodesk_core::{catalog, AerodeskConfig};
use aerodesk_server::db::{create_pool_with_options, schema, PgStorage};
use aerodesk_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Bearer token callers must present
    #[arg(long, env = "AERODESK_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Create missing tables before serving (development databases)
    #[arg(long)]
    pub bootstrap_schema: bool,
}

impl ServeArgs {
    /// Flags win over file and environment
    fn apply(&self, config: &mut AerodeskConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if self.cors_permissive {
            config.cors_permissive = true;
        }
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
        if let Some(token) = &self.api_token {
            config.api_token = Some(token.clone()).filter(|t| !t.is_empty());
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AerodeskConfig::load().context("Failed to load configuration")?;
    args.apply(&mut config);

    catalog::validate().context("Schema catalog is inconsistent")?;

    let database_url = config.database_url.clone().context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.aerodesk/config.toml",
    )?;

    tracing::info!("Starting aerodesk server on {}", config.bind);

    let pool = create_pool_with_options(&database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;
    let storage = PgStorage::new(pool);

    if args.bootstrap_schema {
        schema::bootstrap(&storage)
            .await
            .context("Failed to bootstrap schema")?;
    }

    run_server(Arc::new(storage), ServerConfig::from(&config))
        .await
        .context("Server error")?;

    Ok(())
}
