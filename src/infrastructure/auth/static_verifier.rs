//! Verifier backed by a single statically configured identity
//!
//! The comparison is plain string equality and the password is held unhashed.
//! A verifier backed by a real credential store must hash stored secrets and
//! compare in constant time; this one only models the lookup contract.

use std::fmt::Debug;

use crate::domain::auth::{AuthError, CredentialVerifier, Identity, ADMIN_ROLE};

pub const DEFAULT_TRUSTED_USERNAME: &str = "admin";
pub const DEFAULT_TRUSTED_PASSWORD: &str = "123456";

/// Verifier that accepts exactly one username/password pair
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
    role: String,
}

impl Debug for StaticCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialVerifier")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .finish()
    }
}

impl StaticCredentialVerifier {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_USERNAME, DEFAULT_TRUSTED_PASSWORD, ADMIN_ROLE)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username == self.username && password == self.password {
            Ok(Identity::new(username, [self.role.as_str()]))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
