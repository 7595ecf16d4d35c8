//! Authenticated identity

use std::collections::BTreeSet;

use serde::Serialize;

/// Role granted to the built-in trusted identity
pub const ADMIN_ROLE: &str = "Admin";

/// Identity produced by a successful credential check
///
/// Lives for a single request and is consumed by the token issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    username: String,
    roles: BTreeSet<String>,
}

impl Identity {
    /// Create an identity with the given roles
    pub fn new<I, R>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    /// Role carried into the token. Identities are assumed to hold one primary role;
    /// when several are present the first in sort order wins.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.iter().next().map(String::as_str)
    }
}
