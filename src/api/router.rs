use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;

/// Paths served by [`create_router`]; extra routers merged beside it must avoid them
pub const ROUTED_PATHS: &[&str] = &["/health", "/ready", "/live", "/auth/login"];

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints
        .nest("/auth", auth::create_auth_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
