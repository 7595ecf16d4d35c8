//! Claim set embedded in issued tokens

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::IssuerError;
use super::identity::Identity;
use super::signing::SigningConfig;

/// Lifetime of every issued token
pub const TOKEN_LIFETIME_HOURS: i64 = 2;

pub fn token_lifetime() -> Duration {
    Duration::hours(TOKEN_LIFETIME_HOURS)
}

/// JWT payload using registered claim names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject (username)
    pub sub: String,
    /// Primary role of the subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Unique token identifier
    pub jti: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl ClaimSet {
    /// Build the claims for an identity at the given instant
    pub fn new(
        identity: &Identity,
        config: &SigningConfig,
        jti: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, IssuerError> {
        let exp = now
            .checked_add_signed(token_lifetime())
            .ok_or(IssuerError::ExpiryOutOfRange)?;

        Ok(Self {
            sub: identity.username().to_string(),
            role: identity.primary_role().map(str::to_string),
            jti: jti.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: config.issuer().to_string(),
            aud: config.audience().to_string(),
        })
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::ADMIN_ROLE;

    fn signing_config() -> SigningConfig {
        SigningConfig::new("0123456789abcdef0123456789abcdef", "login-api", "login-clients")
    }

    #[test]
    fn test_claims_from_identity() {
        let identity = Identity::new("admin", [ADMIN_ROLE]);
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let claims = ClaimSet::new(&identity, &signing_config(), "jti-1", now).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        assert_eq!(claims.jti, "jti-1");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.iss, "login-api");
        assert_eq!(claims.aud, "login-clients");
    }

    #[test]
    fn test_expiry_is_two_hours_after_issue() {
        let identity = Identity::new("admin", [ADMIN_ROLE]);
        let now = Utc::now();

        let claims = ClaimSet::new(&identity, &signing_config(), "jti", now).unwrap();

        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
        assert_eq!(
            claims.expires_at().unwrap().timestamp() - now.timestamp(),
            token_lifetime().num_seconds()
        );
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let identity = Identity::new("admin", [ADMIN_ROLE]);

        let result = ClaimSet::new(&identity, &signing_config(), "jti", DateTime::<Utc>::MAX_UTC);

        assert_eq!(result, Err(IssuerError::ExpiryOutOfRange));
    }

    #[test]
    fn test_role_omitted_when_identity_has_none() {
        let identity = Identity::new("guest", Vec::<String>::new());
        let claims = ClaimSet::new(&identity, &signing_config(), "jti", Utc::now()).unwrap();

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(json["sub"], "guest");
    }
}
