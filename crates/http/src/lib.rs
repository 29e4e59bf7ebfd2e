//! HTTP API server for mfr-recon.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use mfr_recon_service::{AliasService, ManufacturerService};
use mfr_recon_storage::StorageBackend;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds the services, which share one storage backend and its pool.
pub struct AppState {
    /// Manufacturer listing, create-and-link and rename
    pub manufacturer_service: Arc<ManufacturerService>,
    /// Unmatched listing, inactivation and pairing
    pub alias_service: Arc<AliasService>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self {
            manufacturer_service: Arc::new(ManufacturerService::new(Arc::clone(&storage))),
            alias_service: Arc::new(AliasService::new(storage)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/manufacturers-with-aliases",
            get(handlers::manufacturers::list_manufacturers_with_aliases),
        )
        .route(
            "/api/unmatched-supplier-manufacturers",
            get(handlers::aliases::list_unmatched_supplier_manufacturers),
        )
        .route(
            "/api/create-and-link-manufacturer",
            post(handlers::manufacturers::create_and_link_manufacturer),
        )
        .route(
            "/api/inactivate-supplier-manufacturer",
            post(handlers::aliases::inactivate_supplier_manufacturer),
        )
        .route("/api/pair-manufacturer", post(handlers::aliases::pair_manufacturer))
        .route("/api/unpair-alias", post(handlers::aliases::unpair_alias))
        .route("/api/unpair-all", post(handlers::aliases::unpair_all))
        .route(
            "/api/update-manufacturer-name",
            post(handlers::manufacturers::update_manufacturer_name),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
