use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::products::repo_types::{Product, ProductRow};

/// Inventory entry with its product eagerly loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub product: Product,
    pub expiration_date: Date,
    pub quantity: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub product: Product,
    pub expiration_date: Date,
    pub quantity: i32,
}

/// `inventory_items` joined with `products` and `nutriments`.
#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub id: Uuid,
    pub expiration_date: Date,
    pub quantity: i32,
    pub created_at: OffsetDateTime,
    pub product_id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub per_100g_id: Option<Uuid>,
    pub per_serving_id: Option<Uuid>,
    pub product_created_at: OffsetDateTime,
}

/// Item-level columns left once the product part is split off.
pub struct ItemColumns {
    pub id: Uuid,
    pub expiration_date: Date,
    pub quantity: i32,
    pub created_at: OffsetDateTime,
}

impl InventoryRow {
    pub fn split(self) -> (ItemColumns, ProductRow) {
        (
            ItemColumns {
                id: self.id,
                expiration_date: self.expiration_date,
                quantity: self.quantity,
                created_at: self.created_at,
            },
            ProductRow {
                id: self.product_id,
                barcode: self.barcode,
                product_name: self.product_name,
                brand: self.brand,
                ingredients: self.ingredients,
                per_100g_id: self.per_100g_id,
                per_serving_id: self.per_serving_id,
                created_at: self.product_created_at,
            },
        )
    }
}
