//! CLI module for Credential Gateway
//!
//! - `serve`: run the HTTP server (default)
//! - `migrate`: apply the database schema and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Credential Gateway - user registration and login over HTTP
#[derive(Parser)]
#[command(name = "credential-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default mode)
    #[default]
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

/// Load `.env`, read configuration and install the tracing subscriber
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}
