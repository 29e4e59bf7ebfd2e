//! AliasStore implementation for PgStorage.

use super::*;

use crate::traits::AliasStore;
use async_trait::async_trait;
use mfr_recon_core::Page;

#[async_trait]
impl AliasStore for PgStorage {
    async fn list_unmatched_aliases(
        &self,
        search: &str,
        page: Page,
    ) -> Result<Vec<AliasRef>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, name FROM supplier_manufacturers
             WHERE manufacturer_id IS NULL
               AND is_active = TRUE
               AND ($1::text = '' OR name ILIKE $2)
             ORDER BY name ASC, id ASC
             LIMIT $3 OFFSET $4",
        )
        .bind(search)
        .bind(contains_pattern(search))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_alias_ref).collect()
    }

    async fn get_alias(&self, id: &str) -> Result<Option<SupplierAlias>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {ALIAS_COLUMNS} FROM supplier_manufacturers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_alias(&r)).transpose()
    }

    async fn inactivate_alias(&self, id: &str) -> Result<u64, StorageError> {
        let mut tx = self.pool.begin().await?;
        let affected =
            sqlx::query("UPDATE supplier_manufacturers SET is_active = FALSE WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        tx.commit().await?;
        Ok(affected)
    }

    async fn pair_alias(&self, alias_id: &str, manufacturer_id: &str) -> Result<u64, StorageError> {
        let result =
            sqlx::query("UPDATE supplier_manufacturers SET manufacturer_id = $1 WHERE id = $2")
                .bind(manufacturer_id)
                .bind(alias_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn unpair_alias(&self, alias_id: &str) -> Result<u64, StorageError> {
        let result =
            sqlx::query("UPDATE supplier_manufacturers SET manufacturer_id = NULL WHERE id = $1")
                .bind(alias_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn unpair_all(&self, manufacturer_id: &str) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "UPDATE supplier_manufacturers SET manufacturer_id = NULL WHERE manufacturer_id = $1",
        )
        .bind(manufacturer_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
