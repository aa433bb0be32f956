use serde::Deserialize;
use serde_json::{Map, Value};

use crate::nutrition::{self, Nutrition};

/// Top-level body of `/api/v0/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    status: Option<Value>, // 1 when found, 0 when the catalog has no record
    #[serde(default)]
    product: Option<RawProduct>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProduct {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    ingredients_text: Option<String>,
    #[serde(default)]
    nutriments: Option<Map<String, Value>>,
}

/// Product as the catalog describes it, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub ingredients: String,
    pub nutrition: Nutrition,
}

impl CatalogEnvelope {
    /// Unwraps the product looked up under `barcode`, or `None` when the
    /// catalog reported it missing.
    pub fn into_product(self, barcode: &str) -> Option<CatalogProduct> {
        if self.status.as_ref().and_then(Value::as_i64) == Some(0) {
            return None;
        }
        let raw = self.product?;
        Some(CatalogProduct {
            barcode: barcode.to_string(),
            product_name: raw.product_name.unwrap_or_default(),
            brand: raw.brands.unwrap_or_default(),
            ingredients: raw.ingredients_text.unwrap_or_default(),
            nutrition: raw
                .nutriments
                .as_ref()
                .map(nutrition::normalize)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CatalogEnvelope {
        serde_json::from_str(body).expect("valid envelope")
    }

    #[test]
    fn decodes_product_and_normalizes_nutriments() {
        let env = parse(
            r#"{"code":"123","status":1,"product":{
                "product_name":"Milk","brands":"Acme","ingredients_text":"milk",
                "nutriments":{"energy-kcal_100g":64,"fat_100g":3.6}}}"#,
        );
        let p = env.into_product("123").expect("product present");
        assert_eq!(p.barcode, "123");
        assert_eq!(p.product_name, "Milk");
        assert_eq!(p.brand, "Acme");
        assert_eq!(p.ingredients, "milk");
        let r = p.nutrition.per_100g.expect("per_100g present");
        assert_eq!(r.energy_kcal, 64.0);
        assert_eq!(r.fat, 3.6);
        assert!(p.nutrition.per_serving.is_none());
    }

    #[test]
    fn status_zero_means_not_found() {
        let env = parse(r#"{"code":"42","status":0,"status_verbose":"product not found"}"#);
        assert!(env.into_product("42").is_none());
    }

    #[test]
    fn missing_product_means_not_found() {
        assert!(parse("{}").into_product("42").is_none());
    }

    #[test]
    fn sparse_product_gets_empty_strings_and_no_rations() {
        let env = parse(r#"{"product":{"product_name":null}}"#);
        let p = env.into_product("7").expect("product present");
        assert_eq!(p.product_name, "");
        assert_eq!(p.brand, "");
        assert_eq!(p.ingredients, "");
        assert_eq!(p.nutrition, Nutrition::default());
    }
}
