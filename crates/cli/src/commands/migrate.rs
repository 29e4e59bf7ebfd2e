use anyhow::{Context, Result};
use mfr_recon_core::PoolSettings;
use mfr_recon_storage::StorageBackend;

pub(crate) async fn run(database_url: &str) -> Result<()> {
    let storage = StorageBackend::new_postgres(database_url, PoolSettings::from_env())
        .await
        .context("failed to connect to PostgreSQL")?;
    storage.migrate().await.context("schema bootstrap failed")?;
    tracing::info!("Schema is up to date");
    Ok(())
}
