use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::CatalogProduct;
use crate::nutrition::{Nutrition, Ration};

/// Stored product with its full nutrition graph loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub nutrition: Nutrition,
    pub created_at: OffsetDateTime,
}

/// Product about to be stored for the first time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub nutrition: Nutrition,
}

impl From<CatalogProduct> for NewProduct {
    fn from(p: CatalogProduct) -> Self {
        Self {
            barcode: p.barcode,
            product_name: p.product_name,
            brand: p.brand,
            ingredients: p.ingredients,
            nutrition: p.nutrition,
        }
    }
}

/// `products` joined with its `nutriments` row.
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub per_100g_id: Option<Uuid>,
    pub per_serving_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, FromRow)]
pub struct RationRow {
    pub id: Uuid,
    pub energy_kcal: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub carbohydrates: f64,
    pub sugars: f64,
    pub fiber: f64,
    pub proteins: f64,
    pub salt: f64,
    pub sodium: f64,
}

impl From<&RationRow> for Ration {
    fn from(r: &RationRow) -> Self {
        Self {
            energy_kcal: r.energy_kcal,
            fat: r.fat,
            saturated_fat: r.saturated_fat,
            carbohydrates: r.carbohydrates,
            sugars: r.sugars,
            fiber: r.fiber,
            proteins: r.proteins,
            salt: r.salt,
            sodium: r.sodium,
        }
    }
}
