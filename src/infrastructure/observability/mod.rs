//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use self::config::MetricsConfig;
pub use self::metrics::{
    create_metrics_router, init_metrics, record_http_request, record_login_attempt, LoginOutcome,
    PrometheusMetrics,
};
