use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::ProductView;
use crate::{
    error::{AppError, ErrorResponse},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/product/:barcode", get(get_product))
}

/// GET /v1/product/:barcode, straight from the catalog.
#[utoipa::path(
    get,
    path = "/v1/product/{barcode}",
    params(("barcode" = String, Path, description = "EAN/UPC barcode")),
    responses(
        (status = 200, description = "Catalog product", body = ProductView),
        (status = 500, description = "Unknown barcode or catalog failure", body = ErrorResponse),
    )
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Result<Json<ProductView>, AppError> {
    let product = state.catalog.fetch_product(&barcode).await?;
    info!(%barcode, product_name = %product.product_name, "catalog product served");
    Ok(Json(ProductView::from(&product)))
}
