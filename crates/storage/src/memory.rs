//! In-process storage backing the service and handler tests.
//!
//! Both tables live behind one `RwLock`, so every operation (including
//! create-and-link) is atomic. The `manufacturer_id` foreign key is checked
//! the way the database would check it. Ordering compares names as Rust
//! strings (byte order), not by database collation, so listings only match
//! PostgreSQL for names that sort the same under both.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mfr_recon_core::{
    ActiveFilter, AliasRef, Manufacturer, ManufacturerWithAliases, NewManufacturer, Page,
    SupplierAlias, is_exact_match,
};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{AliasStore, ManufacturerStore};

#[derive(Debug, Default)]
struct Tables {
    manufacturers: BTreeMap<String, Manufacturer>,
    aliases: BTreeMap<String, SupplierAlias>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn paginate<T>(rows: Vec<T>, page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    rows.into_iter().skip(offset).take(limit).collect()
}

impl MemoryStorage {
    /// Seed a manufacturer row.
    pub async fn insert_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.manufacturers.contains_key(&manufacturer.id) {
            return Err(StorageError::Duplicate(format!("manufacturers.id {}", manufacturer.id)));
        }
        tables.manufacturers.insert(manufacturer.id.clone(), manufacturer);
        Ok(())
    }

    /// Seed a supplier alias row, as the ingest feed would.
    pub async fn insert_alias(&self, alias: SupplierAlias) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.aliases.contains_key(&alias.id) {
            return Err(StorageError::Duplicate(format!("supplier_manufacturers.id {}", alias.id)));
        }
        if let Some(ref manufacturer_id) = alias.manufacturer_id {
            if !tables.manufacturers.contains_key(manufacturer_id) {
                return Err(StorageError::ForeignKey(format!(
                    "manufacturer {manufacturer_id} does not exist"
                )));
            }
        }
        tables.aliases.insert(alias.id.clone(), alias);
        Ok(())
    }

    /// All aliases, for assertions over the whole table.
    pub async fn all_aliases(&self) -> Vec<SupplierAlias> {
        self.tables.read().await.aliases.values().cloned().collect()
    }

    /// All manufacturers, for assertions over the whole table.
    pub async fn all_manufacturers(&self) -> Vec<Manufacturer> {
        self.tables.read().await.manufacturers.values().cloned().collect()
    }
}

#[async_trait]
impl ManufacturerStore for MemoryStorage {
    async fn list_manufacturers_with_aliases(
        &self,
        search: &str,
        active: ActiveFilter,
        page: Page,
    ) -> Result<Vec<ManufacturerWithAliases>, StorageError> {
        let tables = self.tables.read().await;
        let needle = search.to_lowercase();

        let mut rows: Vec<ManufacturerWithAliases> = tables
            .manufacturers
            .values()
            .filter(|m| active.accepts(m.is_active))
            .filter_map(|m| {
                let linked = tables
                    .aliases
                    .values()
                    .filter(|a| a.manufacturer_id.as_deref() == Some(m.id.as_str()));
                let (exact, mut others): (Vec<&SupplierAlias>, Vec<&SupplierAlias>) =
                    linked.partition(|a| is_exact_match(&a.name, &m.name));

                let matches = needle.is_empty()
                    || contains_ignore_case(&m.name, &needle)
                    || others.iter().any(|a| contains_ignore_case(&a.name, &needle));
                if !matches {
                    return None;
                }

                others.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
                Some(ManufacturerWithAliases {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    is_active: m.is_active,
                    has_exact_match: !exact.is_empty(),
                    aliases: others.into_iter().map(AliasRef::from).collect(),
                })
            })
            .collect();

        rows.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        Ok(paginate(rows, page))
    }

    async fn get_manufacturer(&self, id: &str) -> Result<Option<Manufacturer>, StorageError> {
        Ok(self.tables.read().await.manufacturers.get(id).cloned())
    }

    async fn create_manufacturer_and_link(
        &self,
        manufacturer: &NewManufacturer,
        alias_id: &str,
    ) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.manufacturers.contains_key(&manufacturer.id) {
            return Err(StorageError::Duplicate(format!("manufacturers.id {}", manufacturer.id)));
        }
        tables.manufacturers.insert(
            manufacturer.id.clone(),
            Manufacturer {
                id: manufacturer.id.clone(),
                name: manufacturer.name.clone(),
                slug: manufacturer.slug.clone(),
                is_active: true,
            },
        );
        Ok(match tables.aliases.get_mut(alias_id) {
            Some(alias) => {
                alias.manufacturer_id = Some(manufacturer.id.clone());
                1
            },
            None => 0,
        })
    }

    async fn rename_manufacturer(
        &self,
        id: &str,
        name: &str,
        slug: &str,
    ) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.manufacturers.get_mut(id) {
            Some(m) => {
                m.name = name.to_owned();
                m.slug = slug.to_owned();
                1
            },
            None => 0,
        })
    }
}

#[async_trait]
impl AliasStore for MemoryStorage {
    async fn list_unmatched_aliases(
        &self,
        search: &str,
        page: Page,
    ) -> Result<Vec<AliasRef>, StorageError> {
        let tables = self.tables.read().await;
        let needle = search.to_lowercase();
        let mut rows: Vec<&SupplierAlias> = tables
            .aliases
            .values()
            .filter(|a| a.manufacturer_id.is_none() && a.is_active)
            .filter(|a| needle.is_empty() || contains_ignore_case(&a.name, &needle))
            .collect();
        rows.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        Ok(paginate(rows.into_iter().map(AliasRef::from).collect(), page))
    }

    async fn get_alias(&self, id: &str) -> Result<Option<SupplierAlias>, StorageError> {
        Ok(self.tables.read().await.aliases.get(id).cloned())
    }

    async fn inactivate_alias(&self, id: &str) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.aliases.get_mut(id) {
            Some(alias) => {
                alias.is_active = false;
                1
            },
            None => 0,
        })
    }

    async fn pair_alias(&self, alias_id: &str, manufacturer_id: &str) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.aliases.contains_key(alias_id) {
            return Ok(0);
        }
        if !tables.manufacturers.contains_key(manufacturer_id) {
            return Err(StorageError::ForeignKey(format!(
                "manufacturer {manufacturer_id} does not exist"
            )));
        }
        Ok(match tables.aliases.get_mut(alias_id) {
            Some(alias) => {
                alias.manufacturer_id = Some(manufacturer_id.to_owned());
                1
            },
            None => 0,
        })
    }

    async fn unpair_alias(&self, alias_id: &str) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.aliases.get_mut(alias_id) {
            Some(alias) => {
                alias.manufacturer_id = None;
                1
            },
            None => 0,
        })
    }

    async fn unpair_all(&self, manufacturer_id: &str) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        let mut affected = 0;
        for alias in tables.aliases.values_mut() {
            if alias.manufacturer_id.as_deref() == Some(manufacturer_id) {
                alias.manufacturer_id = None;
                affected += 1;
            }
        }
        Ok(affected)
    }
}
