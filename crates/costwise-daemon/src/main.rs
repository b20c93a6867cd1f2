mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::info;

use costwise_api::{CostServiceAdapter, HttpApi};
use costwise_core::{CostService, ModelStore};
use costwise_observe::init_logger;
use costwise_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

use crate::config::DaemonConfig;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = DaemonConfig::from_env()?;
    init_logger(&cfg.logger)?;
    info!(port = cfg.port, model_path = %cfg.model_path.display(), "starting costwised");

    // 2) metrics
    let metrics = PrometheusMetrics::new()?;

    // 3) model store (a missing artifact is a degraded start, not a failure)
    let store = Arc::new(ModelStore::open(&cfg.model_path)?);

    // 4) service + HTTP surface
    let service = Arc::new(CostService::with_metrics(
        Arc::clone(&store),
        Arc::new(metrics.clone()),
    ));
    let handler = Arc::new(CostServiceAdapter::new(service));
    let app = HttpApi::new(handler)
        .router()
        .merge(metrics_router(metrics));

    // 5) serve
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Prometheus exposition endpoint.
fn metrics_router(metrics: PrometheusMetrics) -> Router {
    Router::new().route(
        "/metrics",
        get(move || {
            let metrics = metrics.clone();
            async move { render_metrics(&metrics) }
        }),
    )
}

fn render_metrics(metrics: &PrometheusMetrics) -> Response {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    match encoder.encode(&metrics.gather(), &mut buffer) {
        Ok(()) => (
            [(header::CONTENT_TYPE, encoder.format_type().to_string())],
            buffer,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
