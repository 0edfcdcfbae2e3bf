//! Static emission factor table, in kg CO₂e per unit of quantity.
//!
//! Lookups never fail: a key the table does not know resolves to
//! [`ZERO_FACTOR`]. Callers that need to reject unknown keys check
//! [`FactorLookup::contains`] (or [`ActivityCategory::accepts`]) first.
//!
//! [`ActivityCategory::accepts`]: crate::ActivityCategory::accepts

use crate::ActivityCategory;

/// Factor used for any category or subtype the table does not know.
pub const ZERO_FACTOR: f64 = 0.0;

/// An ordered `key → factor` mapping with a zero fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorLookup {
    entries: &'static [(&'static str, f64)],
}

impl FactorLookup {
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Factor for `key`, or [`ZERO_FACTOR`] when the key is unknown.
    pub fn factor_or_zero(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(factor) => factor,
            None => {
                tracing::debug!(key, "no emission factor, using zero");
                ZERO_FACTOR
            }
        }
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Per-km factors for a car, keyed by fuel type.
pub static CAR_FUEL_FACTORS: FactorLookup = FactorLookup::new(&[
    ("gasoline", 0.23),
    ("diesel", 0.21),
    ("electric", 0.05),
    ("hybrid", 0.12),
]);

/// Per-km factors for everything except cars. Bus, train and plane are per passenger.
pub static TRANSPORTATION_FACTORS: FactorLookup = FactorLookup::new(&[
    ("bus", 0.11),
    ("train", 0.04),
    ("plane", 0.25),
    ("motorcycle", 0.12),
    ("bicycle", 0.0),
    ("walking", 0.0),
]);

/// Per-kWh factors, except water which is per liter.
pub static HOME_FACTORS: FactorLookup = FactorLookup::new(&[
    ("electricity", 0.32),
    ("naturalGas", 0.2),
    ("heating", 0.27),
    ("water", 0.001),
]);

/// Per-kg factors.
pub static FOOD_FACTORS: FactorLookup = FactorLookup::new(&[
    ("redMeat", 24.0),
    ("poultry", 6.9),
    ("fish", 5.4),
    ("dairy", 13.5),
    ("vegetables", 2.0),
    ("fruits", 1.1),
    ("grains", 1.4),
]);

/// Per-item averages.
pub static CONSUMPTION_FACTORS: FactorLookup = FactorLookup::new(&[
    ("clothing", 10.0),
    ("electronics", 30.0),
    ("household", 8.0),
    ("other", 5.0),
]);

pub(crate) const TRANSPORTATION_SUBTYPES: &[&str] = &[
    "car",
    "bus",
    "train",
    "plane",
    "motorcycle",
    "bicycle",
    "walking",
];
pub(crate) const HOME_SUBTYPES: &[&str] = &["electricity", "naturalGas", "heating", "water"];
pub(crate) const FOOD_SUBTYPES: &[&str] = &[
    "redMeat",
    "poultry",
    "fish",
    "dairy",
    "vegetables",
    "fruits",
    "grains",
];
pub(crate) const CONSUMPTION_SUBTYPES: &[&str] = &["clothing", "electronics", "household", "other"];

/// Fuel type assumed for a car when none is given, matching the tracker form.
pub const DEFAULT_FUEL_TYPE: &str = "gasoline";

/// Flat per-subtype lookup for a category. Cars are resolved through
/// [`CAR_FUEL_FACTORS`] instead and are absent here.
pub fn factors_for(category: ActivityCategory) -> &'static FactorLookup {
    match category {
        ActivityCategory::Transportation => &TRANSPORTATION_FACTORS,
        ActivityCategory::Home => &HOME_FACTORS,
        ActivityCategory::Food => &FOOD_FACTORS,
        ActivityCategory::Consumption => &CONSUMPTION_FACTORS,
    }
}
