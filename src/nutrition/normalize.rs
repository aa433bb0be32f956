use serde_json::{Map, Value};

use super::model::{Nutrition, Ration, RationBasis};

/// Maps the catalog's flat `nutriments` object onto [`Nutrition`].
///
/// A ration is built only when its `energy-kcal_<suffix>` key is present, no
/// matter what value it holds. Every other nutrient of that ration falls back
/// to 0 when it is missing, not a number, negative, or not finite. This never
/// fails: a sparse or malformed catalog entry just yields sparse nutrition.
pub fn normalize(raw: &Map<String, Value>) -> Nutrition {
    let mut nutrition = Nutrition::default();
    for basis in RationBasis::ALL {
        if !raw.contains_key(&basis.key(Ration::ENERGY_STEM)) {
            continue;
        }
        let ration = Ration::from_stems(|stem| number(raw, &basis.key(stem)));
        *nutrition.ration_mut(basis) = Some(ration);
    }
    nutrition
}

fn number(raw: &Map<String, Value>, key: &str) -> f64 {
    raw.get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
