//! ManufacturerStore implementation for PgStorage.

use super::*;

use crate::traits::ManufacturerStore;
use async_trait::async_trait;
use mfr_recon_core::{ActiveFilter, NewManufacturer, Page};

/// `$1` raw search term (empty = no search), `$2` its `%term%` pattern,
/// `$3` optional `is_active`, `$4` limit, `$5` offset.
const LIST_WITH_ALIASES_SQL: &str = r"
    SELECT
        m.id,
        m.name,
        m.is_active,
        EXISTS (
            SELECT 1 FROM supplier_manufacturers exact
            WHERE exact.manufacturer_id = m.id
              AND LOWER(exact.name) = LOWER(m.name)
        ) AS has_exact_match,
        COALESCE(
            (SELECT json_agg(json_build_object('id', a.id, 'name', a.name) ORDER BY a.name, a.id)
             FROM supplier_manufacturers a
             WHERE a.manufacturer_id = m.id
               AND LOWER(a.name) <> LOWER(m.name)),
            '[]'::json
        ) AS aliases
    FROM manufacturers m
    WHERE ($1::text = ''
           OR m.name ILIKE $2
           OR EXISTS (
               SELECT 1 FROM supplier_manufacturers s
               WHERE s.manufacturer_id = m.id
                 AND LOWER(s.name) <> LOWER(m.name)
                 AND s.name ILIKE $2
           ))
      AND ($3::boolean IS NULL OR m.is_active = $3)
    ORDER BY m.name ASC, m.id ASC
    LIMIT $4 OFFSET $5";

#[async_trait]
impl ManufacturerStore for PgStorage {
    async fn list_manufacturers_with_aliases(
        &self,
        search: &str,
        active: ActiveFilter,
        page: Page,
    ) -> Result<Vec<ManufacturerWithAliases>, StorageError> {
        let rows = sqlx::query(LIST_WITH_ALIASES_SQL)
            .bind(search)
            .bind(contains_pattern(search))
            .bind(active.as_bool())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_manufacturer_with_aliases).collect()
    }

    async fn get_manufacturer(&self, id: &str) -> Result<Option<Manufacturer>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {MANUFACTURER_COLUMNS} FROM manufacturers WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_manufacturer(&r)).transpose()
    }

    async fn create_manufacturer_and_link(
        &self,
        manufacturer: &NewManufacturer,
        alias_id: &str,
    ) -> Result<u64, StorageError> {
        // Dropping `tx` on an early `?` return rolls both statements back.
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO manufacturers (id, name, slug) VALUES ($1, $2, $3)")
            .bind(&manufacturer.id)
            .bind(&manufacturer.name)
            .bind(&manufacturer.slug)
            .execute(&mut *tx)
            .await?;

        let linked =
            sqlx::query("UPDATE supplier_manufacturers SET manufacturer_id = $1 WHERE id = $2")
                .bind(&manufacturer.id)
                .bind(alias_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        tx.commit().await?;
        Ok(linked)
    }

    async fn rename_manufacturer(
        &self,
        id: &str,
        name: &str,
        slug: &str,
    ) -> Result<u64, StorageError> {
        let result = sqlx::query("UPDATE manufacturers SET name = $1, slug = $2 WHERE id = $3")
            .bind(name)
            .bind(slug)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
