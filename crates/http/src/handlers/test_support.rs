//! Handler test fixtures over the in-memory backend.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::{IntoResponse, Response};
use mfr_recon_core::{Manufacturer, SupplierAlias, slugify};
use mfr_recon_storage::{MemoryStorage, StorageBackend};

use crate::AppState;

pub(crate) async fn state_with(
    manufacturers: &[(&str, &str)],
    aliases: &[(&str, &str, Option<&str>)],
) -> (Arc<AppState>, MemoryStorage) {
    let memory = MemoryStorage::default();
    for &(id, name) in manufacturers {
        memory
            .insert_manufacturer(Manufacturer {
                id: id.to_owned(),
                name: name.to_owned(),
                slug: slugify(name),
                is_active: true,
            })
            .await
            .unwrap();
    }
    for &(id, name, manufacturer_id) in aliases {
        memory
            .insert_alias(SupplierAlias {
                id: id.to_owned(),
                name: name.to_owned(),
                manufacturer_id: manufacturer_id.map(str::to_owned),
                is_active: true,
            })
            .await
            .unwrap();
    }
    let storage = Arc::new(StorageBackend::Memory(memory.clone()));
    (Arc::new(AppState::new(storage)), memory)
}

/// Status and parsed JSON body of a handler result.
pub(crate) async fn into_parts(result: impl IntoResponse) -> (u16, serde_json::Value) {
    let response: Response = result.into_response();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
