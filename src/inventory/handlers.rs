use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{InventoryItemRequest, InventoryItemView, Pagination};
use super::services::{add_inventory_item, list_inventory};
use crate::{
    error::{AppError, ErrorResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/inventory", get(list_items).post(create_item))
}

/// List inventory items, oldest first.
#[utoipa::path(
    get,
    path = "/v1/inventory",
    params(Pagination),
    responses(
        (status = 200, description = "Inventory items", body = [InventoryItemView]),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[instrument(skip(state, query))]
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<InventoryItemView>>, AppError> {
    let Query(p) = query.map_err(|e| {
        warn!(error = %e, "malformed pagination query");
        AppError::Validation(e.body_text())
    })?;

    let items = list_inventory(&state, &p).await?;
    Ok(Json(items))
}

/// Add an item to the inventory, fetching its product from the catalog if unknown.
#[utoipa::path(
    post,
    path = "/v1/inventory",
    request_body = InventoryItemRequest,
    responses(
        (status = 200, description = "Created inventory item", body = InventoryItemView),
        (status = 400, description = "Malformed body or date", body = ErrorResponse),
        (status = 500, description = "Catalog or storage failure", body = ErrorResponse),
    )
)]
#[instrument(skip(state, body))]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<InventoryItemRequest>, JsonRejection>,
) -> Result<Json<InventoryItemView>, AppError> {
    let Json(req) = body.map_err(|e| {
        warn!(error = %e, "malformed inventory request");
        AppError::Validation(e.body_text())
    })?;

    let view = add_inventory_item(&state, &req.barcode, &req.expiration_date, req.quantity).await?;
    Ok(Json(view))
}
