//! Cloud Resource Orchestrator
//!
//! - In-memory resource registry behind one reader/writer lock
//! - JSON endpoints: /provision, /resources, /resources/{id}, /health
//! - Prometheus text metrics at /metrics
//! - Graceful shutdown on Ctrl-C

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use orchestrator_core::error::{OrchestratorError, Result};
use orchestrator_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "orchestrator exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(config::DEFAULT_CONFIG_PATH)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let id_space = state.cfg().registry.id_space;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| OrchestratorError::Internal(format!("failed to bind {listen}: {e}")))?;

    tracing::info!(%listen, id_space, "🚀 Cloud Resource Orchestrator starting");
    tracing::info!("📊 Metrics available at /metrics");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| OrchestratorError::Internal(format!("server failed: {e}")))?;

    tracing::info!("orchestrator stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
