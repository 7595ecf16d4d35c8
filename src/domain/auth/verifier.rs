//! Capability traits consumed by the login flow

use super::error::AuthError;
use super::identity::Identity;

#[cfg(test)]
use mockall::automock;

/// Checks a username/password pair
#[cfg_attr(test, automock)]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity for a matching pair, `InvalidCredentials` otherwise
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Source of unique token identifiers
#[cfg_attr(test, automock)]
pub trait JtiSource: Send + Sync {
    fn next_jti(&self) -> String;
}
