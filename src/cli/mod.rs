//! CLI module for the login token service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `token`: mint a token once from the command line

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Login token service - exchanges credentials for signed JWTs
#[derive(Parser)]
#[command(name = "login-token-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Verify credentials and print a signed token to stdout
    Token(token::TokenArgs),
}

/// Load `.env` and the layered configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
