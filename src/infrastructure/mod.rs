//! Infrastructure layer - Verifier, token signing, logging and metrics implementations

pub mod auth;
pub mod logging;
pub mod observability;
