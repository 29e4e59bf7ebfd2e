//! PostgreSQL schema bootstrap for the reconciliation tables.
//!
//! Every statement is idempotent, so running against an existing database
//! leaves its data alone.

use sqlx::PgPool;

use crate::error::StorageError;

const STATEMENTS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS manufacturers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS supplier_manufacturers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        manufacturer_id TEXT REFERENCES manufacturers (id),
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_manufacturers_name ON manufacturers (name)",
    "CREATE INDEX IF NOT EXISTS idx_supplier_mfr_manufacturer
        ON supplier_manufacturers (manufacturer_id)",
    "CREATE INDEX IF NOT EXISTS idx_supplier_mfr_unmatched
        ON supplier_manufacturers (name) WHERE manufacturer_id IS NULL AND is_active",
];

/// Create both tables and their indexes if missing.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }
    tracing::info!(statements = STATEMENTS.len(), "schema bootstrap complete");
    Ok(())
}
