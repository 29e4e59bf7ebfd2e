use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use std::sync::Arc;

use mfr_recon_core::AliasRef;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{ListQuery, ManufacturerRequest, PairRequest, SupplierManufacturerRequest};
use crate::response_types::{InactivateResponse, SuccessResponse};

pub async fn list_unmatched_supplier_manufacturers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<AliasRef>>, ApiError> {
    let query = ListQuery::or_default(query);
    let rows = state.alias_service.list_unmatched(query.search.as_deref(), query.page()).await?;
    Ok(Json(rows))
}

pub async fn inactivate_supplier_manufacturer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SupplierManufacturerRequest>, JsonRejection>,
) -> Result<Json<InactivateResponse>, ApiError> {
    let Json(req) = payload?;
    let supplier_manufacturer_id =
        state.alias_service.inactivate(req.supplier_manufacturer_id.as_deref()).await?;
    Ok(Json(InactivateResponse { success: true, supplier_manufacturer_id }))
}

pub async fn pair_manufacturer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PairRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload?;
    state
        .alias_service
        .pair(req.supplier_manufacturer_id.as_deref(), req.manufacturer_id.as_deref())
        .await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn unpair_alias(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SupplierManufacturerRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload?;
    state.alias_service.unpair(req.supplier_manufacturer_id.as_deref()).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn unpair_all(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ManufacturerRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload?;
    state.alias_service.unpair_all(req.manufacturer_id.as_deref()).await?;
    Ok(Json(SuccessResponse::OK))
}
