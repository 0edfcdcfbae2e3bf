//! The emission estimator: a lookup in the factor table, a few category
//! specific adjustments and a two-decimal rounding.

use crate::{
    factors::{factors_for, CAR_FUEL_FACTORS, ZERO_FACTOR},
    ActivityCategory, Modifiers,
};

/// Multiplier for electricity from renewable sources (90% reduction).
pub const RENEWABLE_COEFFICIENT: f64 = 0.1;
/// Multiplier for organic food (10% reduction).
pub const ORGANIC_COEFFICIENT: f64 = 0.9;
/// Multiplier for locally produced food (10% reduction).
pub const LOCAL_COEFFICIENT: f64 = 0.9;
/// Multiplier for second-hand items (80% reduction).
pub const SECOND_HAND_COEFFICIENT: f64 = 0.2;

/// Estimate the kg CO₂e of `quantity` units of `subtype` in `category`.
///
/// Unknown subtypes (and unknown car fuel types) contribute a zero factor.
/// `quantity` is not validated here.
pub fn estimate(
    category: ActivityCategory,
    subtype: &str,
    quantity: f64,
    modifiers: &Modifiers,
) -> f64 {
    let factor = adjusted_factor(category, subtype, modifiers);
    round_to_cents(factor * quantity)
}

/// [`estimate`] for an untyped category name. An unrecognized category
/// resolves to a zero factor like any other unknown key.
pub fn estimate_raw(category: &str, subtype: &str, quantity: f64, modifiers: &Modifiers) -> f64 {
    match category.parse::<ActivityCategory>() {
        Ok(category) => estimate(category, subtype, quantity, modifiers),
        Err(_) => {
            tracing::debug!(category, "unrecognized category, using zero factor");
            round_to_cents(ZERO_FACTOR * quantity)
        }
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn adjusted_factor(category: ActivityCategory, subtype: &str, modifiers: &Modifiers) -> f64 {
    let base = factors_for(category);

    match category {
        ActivityCategory::Transportation => {
            let mut factor = match (subtype, modifiers.fuel_type.as_deref()) {
                ("car", Some(fuel_type)) => CAR_FUEL_FACTORS.factor_or_zero(fuel_type),
                _ => base.factor_or_zero(subtype),
            };
            if let Some(passengers) = modifiers.passengers.filter(|p| *p > 1.0) {
                factor /= passengers;
            }
            factor
        }
        ActivityCategory::Home => {
            let mut factor = base.factor_or_zero(subtype);
            if subtype == "electricity" && modifiers.renewable == Some(true) {
                factor *= RENEWABLE_COEFFICIENT;
            }
            factor
        }
        ActivityCategory::Food => {
            let mut factor = base.factor_or_zero(subtype);
            if modifiers.organic == Some(true) {
                factor *= ORGANIC_COEFFICIENT;
            }
            if modifiers.local == Some(true) {
                factor *= LOCAL_COEFFICIENT;
            }
            factor
        }
        ActivityCategory::Consumption => {
            let mut factor = base.factor_or_zero(subtype);
            if modifiers.is_second_hand() {
                factor *= SECOND_HAND_COEFFICIENT;
            }
            factor
        }
    }
}
