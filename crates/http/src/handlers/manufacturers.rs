use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use std::sync::Arc;

use mfr_recon_core::ManufacturerWithAliases;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CreateAndLinkRequest, ListQuery, UpdateNameRequest};
use crate::response_types::{CreateAndLinkResponse, SuccessResponse};

pub async fn list_manufacturers_with_aliases(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ManufacturerWithAliases>>, ApiError> {
    let query = ListQuery::or_default(query);
    let rows = state
        .manufacturer_service
        .list_with_aliases(query.search.as_deref(), query.active_filter(), query.page())
        .await?;
    Ok(Json(rows))
}

pub async fn create_and_link_manufacturer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAndLinkRequest>, JsonRejection>,
) -> Result<Json<CreateAndLinkResponse>, ApiError> {
    let Json(req) = payload?;
    let manufacturer_id = state
        .manufacturer_service
        .create_and_link(req.supplier_manufacturer_id.as_deref(), req.name.as_deref())
        .await?;
    Ok(Json(CreateAndLinkResponse { success: true, manufacturer_id }))
}

pub async fn update_manufacturer_name(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload?;
    state
        .manufacturer_service
        .rename(req.manufacturer_id.as_deref(), req.new_name.as_deref())
        .await?;
    Ok(Json(SuccessResponse::OK))
}
