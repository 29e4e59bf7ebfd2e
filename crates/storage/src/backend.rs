//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use mfr_recon_core::{
    ActiveFilter, AliasRef, Manufacturer, ManufacturerWithAliases, NewManufacturer, Page,
    PoolSettings, SupplierAlias,
};

use crate::error::StorageError;
use crate::traits::{AliasStore, ManufacturerStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "memory")]
            StorageBackend::Memory(s) => <crate::memory::MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::pg_storage::PgStorage),
    #[cfg(feature = "memory")]
    Memory(crate::memory::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(
        database_url: &str,
        settings: PoolSettings,
    ) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url, settings).await?))
    }

    #[cfg(feature = "memory")]
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::memory::MemoryStorage::default())
    }

    /// Create the schema if it doesn't exist. No-op for the in-memory backend.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        match self {
            Self::Postgres(s) => crate::pg_migrations::run_pg_migrations(s.pool()).await,
            #[cfg(feature = "memory")]
            Self::Memory(_) => Ok(()),
        }
    }
}

// ── ManufacturerStore ────────────────────────────────────────────

#[async_trait]
impl ManufacturerStore for StorageBackend {
    async fn list_manufacturers_with_aliases(
        &self,
        search: &str,
        active: ActiveFilter,
        page: Page,
    ) -> Result<Vec<ManufacturerWithAliases>, StorageError> {
        dispatch!(self, ManufacturerStore, list_manufacturers_with_aliases(search, active, page))
    }

    async fn get_manufacturer(&self, id: &str) -> Result<Option<Manufacturer>, StorageError> {
        dispatch!(self, ManufacturerStore, get_manufacturer(id))
    }

    async fn create_manufacturer_and_link(
        &self,
        manufacturer: &NewManufacturer,
        alias_id: &str,
    ) -> Result<u64, StorageError> {
        dispatch!(self, ManufacturerStore, create_manufacturer_and_link(manufacturer, alias_id))
    }

    async fn rename_manufacturer(
        &self,
        id: &str,
        name: &str,
        slug: &str,
    ) -> Result<u64, StorageError> {
        dispatch!(self, ManufacturerStore, rename_manufacturer(id, name, slug))
    }
}

// ── AliasStore ───────────────────────────────────────────────────

#[async_trait]
impl AliasStore for StorageBackend {
    async fn list_unmatched_aliases(
        &self,
        search: &str,
        page: Page,
    ) -> Result<Vec<AliasRef>, StorageError> {
        dispatch!(self, AliasStore, list_unmatched_aliases(search, page))
    }

    async fn get_alias(&self, id: &str) -> Result<Option<SupplierAlias>, StorageError> {
        dispatch!(self, AliasStore, get_alias(id))
    }

    async fn inactivate_alias(&self, id: &str) -> Result<u64, StorageError> {
        dispatch!(self, AliasStore, inactivate_alias(id))
    }

    async fn pair_alias(&self, alias_id: &str, manufacturer_id: &str) -> Result<u64, StorageError> {
        dispatch!(self, AliasStore, pair_alias(alias_id, manufacturer_id))
    }

    async fn unpair_alias(&self, alias_id: &str) -> Result<u64, StorageError> {
        dispatch!(self, AliasStore, unpair_alias(alias_id))
    }

    async fn unpair_all(&self, manufacturer_id: &str) -> Result<u64, StorageError> {
        dispatch!(self, AliasStore, unpair_all(manufacturer_id))
    }
}
