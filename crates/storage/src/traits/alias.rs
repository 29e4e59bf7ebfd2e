use async_trait::async_trait;
use mfr_recon_core::{AliasRef, Page, SupplierAlias};

use crate::error::StorageError;

/// Supplier alias operations.
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// One page of active aliases with no manufacturer, ordered by name.
    async fn list_unmatched_aliases(
        &self,
        search: &str,
        page: Page,
    ) -> Result<Vec<AliasRef>, StorageError>;

    /// Get alias by ID.
    async fn get_alias(&self, id: &str) -> Result<Option<SupplierAlias>, StorageError>;

    /// Mark the alias inactive.
    async fn inactivate_alias(&self, id: &str) -> Result<u64, StorageError>;

    /// Link the alias to a manufacturer, replacing any previous link.
    async fn pair_alias(&self, alias_id: &str, manufacturer_id: &str) -> Result<u64, StorageError>;

    /// Clear the alias's manufacturer link.
    async fn unpair_alias(&self, alias_id: &str) -> Result<u64, StorageError>;

    /// Clear the link on every alias of `manufacturer_id`.
    async fn unpair_all(&self, manufacturer_id: &str) -> Result<u64, StorageError>;
}
