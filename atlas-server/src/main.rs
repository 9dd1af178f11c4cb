use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use atlas_graph::driver::{GraphDriver, Neo4jDriver};
use atlas_graph::GraphConfig;
use atlas_server::{
    config::Config,
    datasets::DatasetStore,
    routes::{router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("atlas_server=info".parse()?),
        )
        .json()
        .init();

    info!("atlas-server starting");

    // ── Config ────────────────────────────────────────────────────────────────
    let mut config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    // validate_data_dir canonicalizes data_dir so the stored path is always
    // absolute from this point forward.
    config.validate_data_dir().await.map_err(|e| {
        error!("Data dir validation failed: {}", e);
        e
    })?;

    let graph_config = GraphConfig::from_env().map_err(|e| {
        error!("Graph store configuration error: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        data_dir = %config.data_dir.display(),
        addr = %config.bind_addr,
        store = %graph_config.uri,
        "configuration loaded"
    );

    // ── Stores ────────────────────────────────────────────────────────────────
    let datasets = Arc::new(DatasetStore::new(config.data_dir.clone()));

    let driver: Arc<dyn GraphDriver> = Arc::new(
        Neo4jDriver::connect(&graph_config).await.map_err(|e| {
            error!("Graph store connection failed: {}", e);
            anyhow::anyhow!(e)
        })?,
    );

    // ── Axum router ───────────────────────────────────────────────────────────
    let app = router(AppState {
        driver: driver.clone(),
        datasets,
        histogram_bins: config.histogram_bins,
    });

    // ── Listen ────────────────────────────────────────────────────────────────
    info!(addr = %config.bind_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    driver.close().await.ok();
    info!("server stopped");
    Ok(())
}

/// Graceful shutdown on SIGTERM or Ctrl-C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { info!("received Ctrl-C, shutting down"); }
        _ = terminate => { info!("received SIGTERM, shutting down"); }
    }
}
