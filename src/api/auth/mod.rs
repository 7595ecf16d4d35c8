//! Authentication API endpoints
//!
//! Exchanges a username/password pair for a signed JWT.

use axum::{extract::State, routing::post, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request; missing fields are treated as empty strings
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = state
        .login_service
        .login(&request.username, &request.password, Utc::now())?;

    Ok(Json(LoginResponse {
        token: issued.token.into_string(),
    }))
}
