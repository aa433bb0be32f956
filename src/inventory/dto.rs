use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::repo_types::InventoryItem;
use crate::products::dto::ProductView;

#[derive(Debug, Deserialize, ToSchema)]
pub struct InventoryItemRequest {
    pub barcode: String,
    #[schema(example = "2025/01/01")]
    pub expiration_date: String, // YYYY/MM/DD
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InventoryItemView {
    pub id: Uuid,
    pub product: ProductView,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub expiration_date: OffsetDateTime,
    pub quantity: i32,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl From<&InventoryItem> for InventoryItemView {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            product: ProductView::from(&item.product),
            expiration_date: item.expiration_date.midnight().assume_utc(),
            quantity: item.quantity,
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Maximum number of items; all of them when omitted.
    #[serde(default)]
    #[param(minimum = 0)]
    pub limit: Option<i64>,
    /// Items to skip.
    #[serde(default)]
    #[param(minimum = 0)]
    pub offset: i64,
}

impl Pagination {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit.is_some_and(|l| l < 0) {
            return Err("limit must not be negative".into());
        }
        if self.offset < 0 {
            return Err("offset must not be negative".into());
        }
        Ok(())
    }
}
