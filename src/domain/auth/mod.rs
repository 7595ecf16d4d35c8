//! Authentication domain
//!
//! Identity, claim and signing types plus the traits the login flow depends on.

mod claims;
mod error;
mod identity;
mod signing;
mod verifier;

pub use claims::{token_lifetime, ClaimSet, TOKEN_LIFETIME_HOURS};
pub use error::{AuthError, IssuerError};
pub use identity::{Identity, ADMIN_ROLE};
pub use signing::{SigningConfig, MIN_KEY_BYTES};
pub use verifier::{CredentialVerifier, JtiSource};

#[cfg(test)]
pub use verifier::{MockCredentialVerifier, MockJtiSource};
