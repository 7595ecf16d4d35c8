//! Login service: credential check followed by token issuance

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::auth::{AuthError, CredentialVerifier, IssuerError, SigningConfig};
use crate::infrastructure::observability::{record_login_attempt, LoginOutcome};

use super::jwt::{IssuedToken, TokenIssuer};

/// Failure of a login attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Issuer(#[from] IssuerError),
}

/// Runs the verify-then-issue flow against the process-wide signing config
#[derive(Clone)]
pub struct LoginService {
    verifier: Arc<dyn CredentialVerifier>,
    issuer: TokenIssuer,
    signing: Arc<SigningConfig>,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService")
            .field("issuer", &self.issuer)
            .field("signing", &self.signing)
            .finish()
    }
}

impl LoginService {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        issuer: TokenIssuer,
        signing: Arc<SigningConfig>,
    ) -> Self {
        Self {
            verifier,
            issuer,
            signing,
        }
    }

    /// Authenticate `username`/`password` and sign a token valid from `now`
    pub fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, LoginError> {
        let identity = match self.verifier.verify(username, password) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(username = %username, "Login rejected: invalid credentials");
                record_login_attempt(LoginOutcome::InvalidCredentials);
                return Err(e.into());
            }
        };

        match self.issuer.issue(&identity, &self.signing, now) {
            Ok(issued) => {
                info!(
                    username = %identity.username(),
                    jti = %issued.claims.jti,
                    "Login succeeded"
                );
                record_login_attempt(LoginOutcome::Success);
                Ok(issued)
            }
            Err(e) => {
                error!(username = %identity.username(), error = %e, "Token issuance failed");
                record_login_attempt(LoginOutcome::IssuerError);
                Err(e.into())
            }
        }
    }

    pub fn signing_config(&self) -> &SigningConfig {
        &self.signing
    }
}
