use anyhow::Context;
use time::{macros::format_description, Date};
use tracing::{debug, info, instrument, warn};

use super::dto::{InventoryItemView, Pagination};
use super::repo_types::NewInventoryItem;
use crate::error::{AppError, AppResult};
use crate::products::repo_types::{NewProduct, Product};
use crate::state::AppState;

pub const INVALID_DATE_MESSAGE: &str =
    "Invalid date format for expiration_date. Use YYYY/MM/DD.";

/// Parses a `YYYY/MM/DD` date. Month and day must be zero-padded and the
/// date must exist in the calendar.
pub fn parse_expiration_date(text: &str) -> AppResult<Date> {
    let format = format_description!("[year]/[month]/[day]");
    Date::parse(text, &format).map_err(|_| AppError::Validation(INVALID_DATE_MESSAGE.into()))
}

/// Records `quantity` units of the product behind `barcode`.
///
/// The product is taken from the store when known; otherwise it is fetched
/// from the catalog and stored first. Nothing is written if the date is
/// invalid or the product cannot be resolved.
#[instrument(skip(st))]
pub async fn add_inventory_item(
    st: &AppState,
    barcode: &str,
    expiration_date: &str,
    quantity: i32,
) -> AppResult<InventoryItemView> {
    let expiration_date = parse_expiration_date(expiration_date)?;
    let product = resolve_product(st, barcode).await?;

    let item = st
        .store
        .insert_item(NewInventoryItem {
            product,
            expiration_date,
            quantity,
        })
        .await
        .context("save inventory item")
        .map_err(AppError::Storage)?;

    info!(item_id = %item.id, %barcode, quantity, "inventory item added");
    Ok(InventoryItemView::from(&item))
}

async fn resolve_product(st: &AppState, barcode: &str) -> AppResult<Product> {
    let stored = st
        .store
        .find_product(barcode)
        .await
        .context("look up product")
        .map_err(AppError::Storage)?;
    if let Some(product) = stored {
        debug!(%barcode, product_id = %product.id, "product found locally");
        return Ok(product);
    }

    let fetched = st.catalog.fetch_product(barcode).await.map_err(|e| {
        warn!(error = %e, %barcode, "catalog lookup failed");
        e
    })?;

    let product = st
        .store
        .insert_product(NewProduct::from(fetched))
        .await
        .context("save product")
        .map_err(AppError::Storage)?;
    info!(%barcode, product_id = %product.id, "product stored from catalog");
    Ok(product)
}

#[instrument(skip(st))]
pub async fn list_inventory(st: &AppState, page: &Pagination) -> AppResult<Vec<InventoryItemView>> {
    page.validate().map_err(AppError::Validation)?;
    let items = st
        .store
        .list_items(page.limit, page.offset)
        .await
        .context("list inventory")
        .map_err(AppError::Storage)?;
    debug!(count = items.len(), "inventory listed");
    Ok(items.iter().map(InventoryItemView::from).collect())
}
