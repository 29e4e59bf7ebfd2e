//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod aliases;
mod manufacturers;

use std::time::Duration;

use crate::error::StorageError;
use mfr_recon_core::{AliasRef, Manufacturer, ManufacturerWithAliases, PoolSettings, SupplierAlias};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Open a pool against `database_url`.
    ///
    /// Does not touch the schema; call [`crate::run_pg_migrations`] for that.
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!(
            max_connections = settings.max_connections,
            "PgStorage initialized"
        );
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// `%term%` pattern for `ILIKE` substring search.
pub(crate) fn contains_pattern(search: &str) -> String {
    format!("%{}%", escape_like(search))
}

pub(crate) fn row_to_manufacturer(row: &sqlx::postgres::PgRow) -> Result<Manufacturer, StorageError> {
    Ok(Manufacturer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        is_active: row.try_get("is_active")?,
    })
}

pub(crate) fn row_to_manufacturer_with_aliases(
    row: &sqlx::postgres::PgRow,
) -> Result<ManufacturerWithAliases, StorageError> {
    let aliases: serde_json::Value = row.try_get("aliases")?;
    let aliases: Vec<AliasRef> = serde_json::from_value(aliases)?;
    Ok(ManufacturerWithAliases {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        is_active: row.try_get("is_active")?,
        has_exact_match: row.try_get("has_exact_match")?,
        aliases,
    })
}

pub(crate) fn row_to_alias(row: &sqlx::postgres::PgRow) -> Result<SupplierAlias, StorageError> {
    Ok(SupplierAlias {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        manufacturer_id: row.try_get("manufacturer_id")?,
        is_active: row.try_get("is_active")?,
    })
}

pub(crate) fn row_to_alias_ref(row: &sqlx::postgres::PgRow) -> Result<AliasRef, StorageError> {
    Ok(AliasRef { id: row.try_get("id")?, name: row.try_get("name")? })
}

pub(crate) const MANUFACTURER_COLUMNS: &str = "id, name, slug, is_active";

pub(crate) const ALIAS_COLUMNS: &str = "id, name, manufacturer_id, is_active";
