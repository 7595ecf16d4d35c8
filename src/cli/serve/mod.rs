//! Serve command - runs the HTTP API

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router;
use crate::api::router::ROUTED_PATHS;
use crate::config::AppConfig;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let state = crate::create_app_state(&config)?;
    let app = build_app(&config, create_router(state))?;

    let addr = build_socket_addr(&config)?;
    info!("Starting login token service on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_app(config: &AppConfig, router: Router) -> anyhow::Result<Router> {
    if config.metrics.enabled {
        check_metrics_path(&config.metrics.path)?;
    }

    Ok(match init_metrics(&config.metrics) {
        Some(metrics) => router.merge(create_metrics_router(metrics, &config.metrics.path)),
        None => router,
    })
}

/// Reject a metrics path the router would refuse to register
fn check_metrics_path(path: &str) -> anyhow::Result<()> {
    if !path.starts_with('/') || path.len() < 2 {
        anyhow::bail!("metrics.path must start with '/' and name a route, got {:?}", path);
    }

    if path.contains(['{', '}', '*']) {
        anyhow::bail!("metrics.path must be a literal path, got {:?}", path);
    }

    if ROUTED_PATHS.contains(&path) {
        anyhow::bail!("metrics.path {:?} collides with an API route", path);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
