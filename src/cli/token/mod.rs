//! Token command - verifies credentials once and prints the signed token

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use tracing::info;

/// Arguments for the `token` command
#[derive(Args)]
pub struct TokenArgs {
    /// Username to authenticate
    #[arg(long)]
    pub username: String,

    /// Password to authenticate
    #[arg(long)]
    pub password: String,
}

/// Print a token for the given credentials; exits non-zero when they are rejected
pub fn run(args: TokenArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = crate::create_login_service(&config)?;

    let issued = service
        .login(&args.username, &args.password, Utc::now())
        .context("Login failed")?;

    info!(
        jti = %issued.claims.jti,
        expires_at = ?issued.claims.expires_at(),
        "Token issued"
    );

    println!("{}", issued.token.as_str());

    Ok(())
}
