//! Domain layer - Core authentication types and capability traits

pub mod auth;

pub use auth::{AuthError, ClaimSet, CredentialVerifier, Identity, IssuerError, SigningConfig};
