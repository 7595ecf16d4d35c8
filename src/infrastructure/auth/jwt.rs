//! JWT token issuance (HS256)

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::domain::auth::{ClaimSet, Identity, IssuerError, JtiSource, SigningConfig};

/// Algorithm used for every issued token
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Compact `header.payload.signature` token
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&"[hidden]").finish()
    }
}

/// A signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: Token,
    pub claims: ClaimSet,
}

/// Builds and signs claim sets for verified identities
#[derive(Clone)]
pub struct TokenIssuer {
    jti_source: Arc<dyn JtiSource>,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(jti_source: Arc<dyn JtiSource>) -> Self {
        Self { jti_source }
    }

    /// Sign a fresh token for `identity`, valid from `now` for two hours
    pub fn issue(
        &self,
        identity: &Identity,
        config: &SigningConfig,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, IssuerError> {
        // Configuration may be swapped at runtime, so it is re-checked per call
        config.validate()?;

        let claims = ClaimSet::new(identity, config, self.jti_source.next_jti(), now)?;
        let encoding_key = EncodingKey::from_secret(config.key());

        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &encoding_key)
            .map_err(|e| IssuerError::encoding(e.to_string()))?;

        debug!(subject = %claims.sub, jti = %claims.jti, exp = claims.exp, "Issued token");

        Ok(IssuedToken {
            token: Token(token),
            claims,
        })
    }
}
