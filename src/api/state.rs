//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::LoginService;

/// Shared, read-only services handed to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self { login_service }
    }
}
