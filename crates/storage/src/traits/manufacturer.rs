use async_trait::async_trait;
use mfr_recon_core::{ActiveFilter, Manufacturer, ManufacturerWithAliases, NewManufacturer, Page};

use crate::error::StorageError;

/// Canonical manufacturer operations.
#[async_trait]
pub trait ManufacturerStore: Send + Sync {
    /// One page of manufacturers ordered by name, each with its non-exact aliases.
    ///
    /// An empty `search` matches everything; otherwise the manufacturer name or
    /// any non-exact alias name must contain it, ignoring case.
    async fn list_manufacturers_with_aliases(
        &self,
        search: &str,
        active: ActiveFilter,
        page: Page,
    ) -> Result<Vec<ManufacturerWithAliases>, StorageError>;

    /// Get manufacturer by ID.
    async fn get_manufacturer(&self, id: &str) -> Result<Option<Manufacturer>, StorageError>;

    /// Insert `manufacturer` and point alias `alias_id` at it, atomically.
    /// Returns the number of aliases linked (0 when the alias doesn't exist).
    async fn create_manufacturer_and_link(
        &self,
        manufacturer: &NewManufacturer,
        alias_id: &str,
    ) -> Result<u64, StorageError>;

    /// Set name and slug together.
    async fn rename_manufacturer(
        &self,
        id: &str,
        name: &str,
        slug: &str,
    ) -> Result<u64, StorageError>;
}
