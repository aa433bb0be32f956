use serde::Serialize;
use utoipa::ToSchema;

use super::repo_types::Product;
use crate::catalog::CatalogProduct;
use crate::nutrition::{Nutrition, Ration};

/// Ration keyed with the catalog's own nutrient names.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RationView {
    #[serde(rename = "energy-kcal")]
    pub energy_kcal: f64,
    pub fat: f64,
    #[serde(rename = "saturated-fat")]
    pub saturated_fat: f64,
    pub carbohydrates: f64,
    pub sugars: f64,
    pub fiber: f64,
    pub proteins: f64,
    pub salt: f64,
    pub sodium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NutrimentsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_100g: Option<RationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<RationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductView {
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub nutriments: NutrimentsView,
}

impl From<&Ration> for RationView {
    fn from(r: &Ration) -> Self {
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

impl From<&Nutrition> for NutrimentsView {
    fn from(n: &Nutrition) -> Self {
        Self {
            per_100g: n.per_100g.as_ref().map(RationView::from),
            per_serving: n.per_serving.as_ref().map(RationView::from),
        }
    }
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            barcode: p.barcode.clone(),
            product_name: p.product_name.clone(),
            brand: p.brand.clone(),
            ingredients: p.ingredients.clone(),
            nutriments: NutrimentsView::from(&p.nutrition),
        }
    }
}

impl From<&CatalogProduct> for ProductView {
    fn from(p: &CatalogProduct) -> Self {
        Self {
            barcode: p.barcode.clone(),
            product_name: p.product_name.clone(),
            brand: p.brand.clone(),
            ingredients: p.ingredients.clone(),
            nutriments: NutrimentsView::from(&p.nutrition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ration_view_uses_hyphenated_keys() {
        let r = Ration {
            energy_kcal: 64.0,
            saturated_fat: 2.1,
            ..Ration::default()
        };
        let v = serde_json::to_value(RationView::from(&r)).unwrap();
        assert_eq!(v["energy-kcal"], json!(64.0));
        assert_eq!(v["saturated-fat"], json!(2.1));
        assert_eq!(v["sodium"], json!(0.0));
        assert!(v.get("energy_kcal").is_none());
    }

    #[test]
    fn absent_rations_are_omitted_not_zeroed() {
        let n = Nutrition {
            per_100g: None,
            per_serving: Some(Ration::default()),
        };
        let v = serde_json::to_value(NutrimentsView::from(&n)).unwrap();
        assert!(v.get("per_100g").is_none());
        assert_eq!(v["per_serving"]["fat"], json!(0.0));
    }

    #[test]
    fn catalog_product_view_keeps_fields() {
        let p = CatalogProduct {
            barcode: "123".into(),
            product_name: "Milk".into(),
            brand: "Acme".into(),
            ingredients: "milk".into(),
            nutrition: Nutrition::default(),
        };
        let v = serde_json::to_value(ProductView::from(&p)).unwrap();
        assert_eq!(
            v,
            json!({
                "barcode": "123",
                "product_name": "Milk",
                "brand": "Acme",
                "ingredients": "milk",
                "nutriments": {}
            })
        );
    }
}
