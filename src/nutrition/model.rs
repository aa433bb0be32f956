use serde_json::{Map, Value};

/// Basis a ration's figures are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationBasis {
    Per100g,
    PerServing,
}

impl RationBasis {
    pub const ALL: [RationBasis; 2] = [RationBasis::Per100g, RationBasis::PerServing];

    /// Suffix the catalog appends to a nutrient stem for this basis.
    pub fn suffix(self) -> &'static str {
        match self {
            RationBasis::Per100g => "_100g",
            RationBasis::PerServing => "_serving",
        }
    }

    pub fn key(self, stem: &str) -> String {
        format!("{}{}", stem, self.suffix())
    }
}

/// Complete nutrient profile for one basis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ration {
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

impl Ration {
    /// Catalog stem of the nutrient whose presence makes a ration exist.
    pub const ENERGY_STEM: &'static str = "energy-kcal";

    /// Builds a ration by asking `value` for every catalog stem.
    pub fn from_stems(mut value: impl FnMut(&str) -> f64) -> Self {
        Self {
            energy_kcal: value(Self::ENERGY_STEM),
            fat: value("fat"),
            saturated_fat: value("saturated-fat"),
            carbohydrates: value("carbohydrates"),
            sugars: value("sugars"),
            fiber: value("fiber"),
            proteins: value("proteins"),
            salt: value("salt"),
            sodium: value("sodium"),
        }
    }

    /// Every nutrient paired with its catalog stem.
    pub fn stems(&self) -> [(&'static str, f64); 9] {
        [
            (Self::ENERGY_STEM, self.energy_kcal),
            ("fat", self.fat),
            ("saturated-fat", self.saturated_fat),
            ("carbohydrates", self.carbohydrates),
            ("sugars", self.sugars),
            ("fiber", self.fiber),
            ("proteins", self.proteins),
            ("salt", self.salt),
            ("sodium", self.sodium),
        ]
    }
}

/// Nutrition facts owned by a product. Either ration may be missing, which is
/// not the same thing as a ration full of zeros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutrition {
    pub per_100g: Option<Ration>,
    pub per_serving: Option<Ration>,
}

impl Nutrition {
    pub fn ration(&self, basis: RationBasis) -> Option<&Ration> {
        match basis {
            RationBasis::Per100g => self.per_100g.as_ref(),
            RationBasis::PerServing => self.per_serving.as_ref(),
        }
    }

    pub fn ration_mut(&mut self, basis: RationBasis) -> &mut Option<Ration> {
        match basis {
            RationBasis::Per100g => &mut self.per_100g,
            RationBasis::PerServing => &mut self.per_serving,
        }
    }

    /// Writes the nutrition back out in the catalog's `<stem><suffix>` vocabulary.
    pub fn to_catalog_fields(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for basis in RationBasis::ALL {
            let Some(ration) = self.ration(basis) else {
                continue;
            };
            for (stem, value) in ration.stems() {
                out.insert(basis.key(stem), Value::from(value));
            }
        }
        out
    }
}
