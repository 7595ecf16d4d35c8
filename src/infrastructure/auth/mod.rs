//! Authentication infrastructure module
//!
//! Credential verification, token signing and the login flow that ties them together.

mod jti;
mod jwt;
mod service;
mod static_verifier;

pub use jti::{RandomJtiSource, JTI_BYTES};
pub use jwt::{IssuedToken, Token, TokenIssuer, SIGNING_ALGORITHM};
pub use service::{LoginError, LoginService};
pub use static_verifier::{
    StaticCredentialVerifier, DEFAULT_TRUSTED_PASSWORD, DEFAULT_TRUSTED_USERNAME,
};
