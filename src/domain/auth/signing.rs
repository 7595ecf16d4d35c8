//! Token signing configuration

use std::fmt::Debug;

use super::error::IssuerError;

/// Minimum HMAC-SHA256 key length in bytes
pub const MIN_KEY_BYTES: usize = 32;

/// Process-wide signing settings, built once at startup and shared read-only
#[derive(Clone, PartialEq, Eq)]
pub struct SigningConfig {
    key: Vec<u8>,
    issuer: String,
    audience: String,
}

impl Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("key", &"[hidden]")
            .field("key_len", &self.key.len())
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl SigningConfig {
    /// Create a signing configuration without validating it
    pub fn new(
        key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Create a signing configuration, rejecting it if it cannot sign tokens
    pub fn validated(
        key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, IssuerError> {
        let config = Self::new(key, issuer, audience);
        config.validate()?;
        Ok(config)
    }

    /// Check the key length and the issuer/audience identifiers
    pub fn validate(&self) -> Result<(), IssuerError> {
        if self.key.is_empty() {
            return Err(IssuerError::invalid_signing_config("signing key is empty"));
        }

        if self.key.len() < MIN_KEY_BYTES {
            return Err(IssuerError::invalid_signing_config(format!(
                "signing key must be at least {} bytes, got {}",
                MIN_KEY_BYTES,
                self.key.len()
            )));
        }

        if self.issuer.trim().is_empty() {
            return Err(IssuerError::invalid_signing_config("issuer is empty"));
        }

        if self.audience.trim().is_empty() {
            return Err(IssuerError::invalid_signing_config("audience is empty"));
        }

        Ok(())
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }
}
