//! Login token service
//!
//! Verifies a username/password pair and mints an HS256-signed JWT carrying
//! the caller's identity and role:
//! - Pluggable credential verification (a single trusted identity by default)
//! - Token issuance with injected clock and `jti` source
//! - HTTP boundary, layered configuration, logging and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use api::state::AppState;
use infrastructure::auth::{LoginService, RandomJtiSource, TokenIssuer};

/// Build the login service, rejecting an unusable signing configuration up front
pub fn create_login_service(config: &AppConfig) -> anyhow::Result<LoginService> {
    let signing = config
        .signing_config()
        .context("JWT signing configuration is invalid (check jwt.key, jwt.issuer, jwt.audience)")?;

    info!(
        issuer = %signing.issuer(),
        audience = %signing.audience(),
        "Signing configuration loaded"
    );

    Ok(LoginService::new(
        Arc::new(config.credential_verifier()),
        TokenIssuer::new(Arc::new(RandomJtiSource::new())),
        Arc::new(signing),
    ))
}

/// Create the application state shared by all handlers
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let login_service = create_login_service(config)?;
    Ok(AppState::new(Arc::new(login_service)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_rejects_missing_key() {
        let config = AppConfig::default();

        let err = create_app_state(&config).unwrap_err();
        assert!(err.to_string().contains("JWT signing configuration is invalid"));
    }

    #[test]
    fn test_startup_with_valid_config() {
        let mut config = AppConfig::default();
        config.jwt.key = "startup-test-signing-key-of-32-bytes".to_string();
        config.jwt.issuer = "login-api".to_string();
        config.jwt.audience = "login-clients".to_string();

        let service = create_login_service(&config).unwrap();
        let issued = service
            .login("admin", "123456", chrono::Utc::now())
            .unwrap();

        assert_eq!(issued.claims.iss, "login-api");
        assert_eq!(issued.claims.aud, "login-clients");
    }
}
