use anyhow::{Context, Result};
use mfr_recon_core::PoolSettings;
use mfr_recon_http::{AppState, create_router};
use mfr_recon_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(database_url: &str, host: &str, port: u16, migrate: bool) -> Result<()> {
    let storage = StorageBackend::new_postgres(database_url, PoolSettings::from_env())
        .await
        .context("failed to connect to PostgreSQL")?;
    if migrate {
        storage.migrate().await.context("schema bootstrap failed")?;
    }

    let state = Arc::new(AppState::new(Arc::new(storage)));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
