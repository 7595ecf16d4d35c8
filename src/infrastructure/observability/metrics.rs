//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("login_service_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Result of a login attempt, used as a metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
    IssuerError,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidCredentials => "invalid_credentials",
            Self::IssuerError => "issuer_error",
        }
    }
}

/// Record a login attempt and, on success, the issued token
pub fn record_login_attempt(outcome: LoginOutcome) {
    counter!("auth_login_attempts_total", "outcome" => outcome.as_str()).increment(1);

    if outcome == LoginOutcome::Success {
        counter!("auth_tokens_issued_total").increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_outcome_labels() {
        assert_eq!(LoginOutcome::Success.as_str(), "success");
        assert_eq!(LoginOutcome::InvalidCredentials.as_str(), "invalid_credentials");
        assert_eq!(LoginOutcome::IssuerError.as_str(), "issuer_error");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_login_attempt(LoginOutcome::Success);
        record_http_request("POST", "/auth/login", 200, Duration::from_millis(3));
    }

    #[test]
    fn test_disabled_metrics_not_installed() {
        let config = MetricsConfig {
            enabled: false,
            path: "/metrics".to_string(),
        };

        assert!(init_metrics(&config).is_none());
    }
}
