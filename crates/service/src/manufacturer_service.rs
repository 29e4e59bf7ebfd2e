use std::sync::Arc;

use mfr_recon_core::{ActiveFilter, ManufacturerWithAliases, NewManufacturer, Page, slugify};
use mfr_recon_storage::StorageBackend;
use mfr_recon_storage::traits::ManufacturerStore;

use crate::{ServiceError, require_fields};

pub struct ManufacturerService {
    storage: Arc<StorageBackend>,
}

impl ManufacturerService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// One page of manufacturers with their aliases. `None` search lists all.
    pub async fn list_with_aliases(
        &self,
        search: Option<&str>,
        active: ActiveFilter,
        page: Page,
    ) -> Result<Vec<ManufacturerWithAliases>, ServiceError> {
        let search = search.unwrap_or_default();
        Ok(self.storage.list_manufacturers_with_aliases(search, active, page).await?)
    }

    /// Create a manufacturer named `name` and link the alias to it in one
    /// transaction. Returns the new manufacturer id.
    pub async fn create_and_link(
        &self,
        supplier_manufacturer_id: Option<&str>,
        name: Option<&str>,
    ) -> Result<String, ServiceError> {
        let [alias_id, name] = require_fields([
            ("supplier_manufacturer_id", supplier_manufacturer_id),
            ("name", name),
        ])?;

        let manufacturer = NewManufacturer::from_name(name);
        let linked = self.storage.create_manufacturer_and_link(&manufacturer, alias_id).await?;
        if linked == 0 {
            tracing::warn!(
                manufacturer_id = %manufacturer.id,
                supplier_manufacturer_id = %alias_id,
                "manufacturer created but no alias matched the link update"
            );
        }
        tracing::info!(
            manufacturer_id = %manufacturer.id,
            slug = %manufacturer.slug,
            supplier_manufacturer_id = %alias_id,
            "created and linked manufacturer"
        );
        Ok(manufacturer.id)
    }

    /// Rename a manufacturer, recomputing its slug.
    pub async fn rename(
        &self,
        manufacturer_id: Option<&str>,
        new_name: Option<&str>,
    ) -> Result<(), ServiceError> {
        let [id, new_name] =
            require_fields([("manufacturer_id", manufacturer_id), ("new_name", new_name)])?;
        let slug = slugify(new_name);
        let updated = self.storage.rename_manufacturer(id, new_name, &slug).await?;
        tracing::info!(manufacturer_id = %id, %slug, updated, "renamed manufacturer");
        Ok(())
    }
}
