use std::sync::Arc;

use mfr_recon_core::{AliasRef, Page};
use mfr_recon_storage::StorageBackend;
use mfr_recon_storage::traits::AliasStore;

use crate::{ServiceError, require_fields};

pub struct AliasService {
    storage: Arc<StorageBackend>,
}

impl AliasService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// One page of active aliases not yet paired with a manufacturer.
    pub async fn list_unmatched(
        &self,
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<AliasRef>, ServiceError> {
        let search = search.unwrap_or_default();
        Ok(self.storage.list_unmatched_aliases(search, page).await?)
    }

    /// Mark an alias inactive. Returns the alias id for the response body.
    pub async fn inactivate(
        &self,
        supplier_manufacturer_id: Option<&str>,
    ) -> Result<String, ServiceError> {
        let [id] = require_fields([("supplier_manufacturer_id", supplier_manufacturer_id)])?;
        let updated = self.storage.inactivate_alias(id).await?;
        tracing::info!(supplier_manufacturer_id = %id, updated, "inactivated alias");
        Ok(id.to_owned())
    }

    pub async fn pair(
        &self,
        supplier_manufacturer_id: Option<&str>,
        manufacturer_id: Option<&str>,
    ) -> Result<(), ServiceError> {
        let [alias_id, manufacturer_id] = require_fields([
            ("supplier_manufacturer_id", supplier_manufacturer_id),
            ("manufacturer_id", manufacturer_id),
        ])?;
        let updated = self
            .storage
            .pair_alias(alias_id, manufacturer_id)
            .await
            .inspect_err(|e| {
                if e.is_foreign_key() {
                    tracing::warn!(
                        supplier_manufacturer_id = %alias_id,
                        manufacturer_id = %manufacturer_id,
                        "pair target manufacturer does not exist"
                    );
                }
            })?;
        tracing::info!(
            supplier_manufacturer_id = %alias_id,
            manufacturer_id = %manufacturer_id,
            updated,
            "paired alias"
        );
        Ok(())
    }

    pub async fn unpair(&self, supplier_manufacturer_id: Option<&str>) -> Result<(), ServiceError> {
        let [alias_id] = require_fields([("supplier_manufacturer_id", supplier_manufacturer_id)])?;
        let updated = self.storage.unpair_alias(alias_id).await?;
        tracing::info!(supplier_manufacturer_id = %alias_id, updated, "unpaired alias");
        Ok(())
    }

    /// Unpair every alias of a manufacturer. Zero affected rows is success.
    pub async fn unpair_all(&self, manufacturer_id: Option<&str>) -> Result<(), ServiceError> {
        let [manufacturer_id] = require_fields([("manufacturer_id", manufacturer_id)])?;
        let updated = self.storage.unpair_all(manufacturer_id).await?;
        tracing::info!(manufacturer_id = %manufacturer_id, updated, "unpaired all aliases");
        Ok(())
    }
}
