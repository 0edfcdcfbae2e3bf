use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

use crate::{
    estimate,
    factors::{CAR_FUEL_FACTORS, DEFAULT_FUEL_TYPE},
    ActivityCategory, Modifiers,
};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Opaque activity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ActivityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ActivityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    #[error("please enter a valid value (got {0})")]
    InvalidQuantity(f64),
    #[error("unknown activity type '{kind}' for category {category}")]
    UnknownActivityType {
        category: ActivityCategory,
        kind: String,
    },
    #[error("unknown fuel type '{0}'")]
    UnknownFuelType(String),
    #[error("passengers must be at least 1 (got {0})")]
    InvalidPassengers(f64),
}

/// A logged activity. The footprint is computed once, when the activity is
/// recorded, and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub category: ActivityCategory,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub unit: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// kg CO₂e
    pub carbon_footprint: f64,
}

/// User input for a new activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub category: ActivityCategory,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Defaults to the day the activity is recorded.
    #[serde(default, with = "iso_date::option")]
    pub date: Option<Date>,
}

impl NewActivity {
    pub fn new(category: ActivityCategory, kind: impl Into<String>, value: f64) -> Self {
        Self {
            category,
            kind: kind.into(),
            value,
            modifiers: Modifiers::default(),
            date: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn on(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}

impl Activity {
    /// Validate `input` and compute its footprint.
    ///
    /// The quantity must be finite and positive and the type must belong to
    /// the category. Transportation passengers must be at least 1, and a car's
    /// fuel type must be a known one; a car without a fuel type is treated as
    /// gasoline.
    pub fn record(input: NewActivity, today: Date) -> Result<Self, ActivityError> {
        if !input.value.is_finite() || input.value <= 0.0 {
            return Err(ActivityError::InvalidQuantity(input.value));
        }
        if !input.category.accepts(&input.kind) {
            return Err(ActivityError::UnknownActivityType {
                category: input.category,
                kind: input.kind,
            });
        }

        let mut modifiers = input.modifiers;
        if input.category == ActivityCategory::Transportation {
            if let Some(passengers) = modifiers.passengers {
                if !passengers.is_finite() || passengers < 1.0 {
                    return Err(ActivityError::InvalidPassengers(passengers));
                }
            }
            if input.kind == "car" {
                let fuel = modifiers
                    .fuel_type
                    .get_or_insert_with(|| DEFAULT_FUEL_TYPE.to_string());
                if !CAR_FUEL_FACTORS.contains(fuel) {
                    return Err(ActivityError::UnknownFuelType(fuel.clone()));
                }
            }
        }

        let carbon_footprint = estimate(input.category, &input.kind, input.value, &modifiers);

        Ok(Self {
            id: ActivityId::generate(),
            category: input.category,
            unit: input.category.unit_for(&input.kind).to_string(),
            kind: input.kind,
            value: input.value,
            date: input.date.unwrap_or(today),
            carbon_footprint,
        })
    }

    pub fn display_name(&self) -> String {
        display_name(&self.kind)
    }
}

/// Turn a camelCase subtype into a label: `naturalGas` becomes `Natural Gas`.
pub fn display_name(kind: &str) -> String {
    let mut label = String::with_capacity(kind.len() + 4);
    for (i, c) in kind.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn record_computes_footprint_unit_and_date() {
        let input = NewActivity::new(ActivityCategory::Home, "electricity", 120.0);
        let activity = Activity::record(input, date!(2025 - 05 - 02)).unwrap();

        assert_eq!(activity.carbon_footprint, 38.4);
        assert_eq!(activity.unit, "kWh");
        assert_eq!(activity.date, date!(2025 - 05 - 02));
        assert_eq!(activity.kind, "electricity");
        assert!(!activity.id.as_str().is_empty());
    }

    #[test]
    fn record_keeps_explicit_date() {
        let input =
            NewActivity::new(ActivityCategory::Food, "fish", 1.0).on(date!(2024 - 12 - 24));
        let activity = Activity::record(input, date!(2025 - 01 - 01)).unwrap();
        assert_eq!(activity.date, date!(2024 - 12 - 24));
    }

    #[test]
    fn record_rejects_bad_quantities() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let input = NewActivity::new(ActivityCategory::Food, "fish", value);
            let err = Activity::record(input, date!(2025 - 05 - 01)).unwrap_err();
            assert!(matches!(err, ActivityError::InvalidQuantity(_)), "{value}");
        }
    }

    #[test]
    fn record_rejects_type_from_another_category() {
        let input = NewActivity::new(ActivityCategory::Food, "electricity", 3.0);
        let err = Activity::record(input, date!(2025 - 05 - 01)).unwrap_err();
        assert_eq!(
            err,
            ActivityError::UnknownActivityType {
                category: ActivityCategory::Food,
                kind: "electricity".to_string(),
            }
        );
    }

    #[test]
    fn car_defaults_to_gasoline() {
        let input = NewActivity::new(ActivityCategory::Transportation, "car", 25.0);
        let activity = Activity::record(input, date!(2025 - 05 - 01)).unwrap();
        assert_eq!(activity.carbon_footprint, 5.75);
        assert_eq!(activity.unit, "km");
    }

    #[test]
    fn car_rejects_unknown_fuel_type() {
        let input = NewActivity::new(ActivityCategory::Transportation, "car", 100.0)
            .with_modifiers(Modifiers::new().with_fuel_type("hydrogen"));
        let err = Activity::record(input, date!(2025 - 05 - 01)).unwrap_err();
        assert_eq!(err, ActivityError::UnknownFuelType("hydrogen".to_string()));

        let input = NewActivity::new(ActivityCategory::Transportation, "car", 100.0)
            .with_modifiers(Modifiers::new().with_fuel_type("electric"));
        let activity = Activity::record(input, date!(2025 - 05 - 01)).unwrap();
        assert_eq!(activity.carbon_footprint, 5.0);
    }

    #[test]
    fn transportation_rejects_bad_passenger_counts() {
        for passengers in [0.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
            let input = NewActivity::new(ActivityCategory::Transportation, "car", 100.0)
                .with_modifiers(Modifiers::new().with_passengers(passengers));
            let err = Activity::record(input, date!(2025 - 05 - 01)).unwrap_err();
            assert!(
                matches!(err, ActivityError::InvalidPassengers(_)),
                "{passengers}"
            );
        }

        let input = NewActivity::new(ActivityCategory::Transportation, "bus", 10.0)
            .with_modifiers(Modifiers::new().with_passengers(1.0));
        assert!(Activity::record(input, date!(2025 - 05 - 01)).is_ok());
    }

    #[test]
    fn estimator_stays_tolerant_of_unknown_fuel() {
        let modifiers = Modifiers::new().with_fuel_type("hydrogen");
        assert_eq!(
            estimate(ActivityCategory::Transportation, "car", 100.0, &modifiers),
            0.0
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = ActivityId::generate();
        let b = ActivityId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_with_wire_names() {
        let activity = Activity {
            id: ActivityId::new("1"),
            category: ActivityCategory::Transportation,
            kind: "car".to_string(),
            value: 25.0,
            unit: "km".to_string(),
            date: date!(2025 - 05 - 01),
            carbon_footprint: 5.75,
        };

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["category"], "transportation");
        assert_eq!(json["type"], "car");
        assert_eq!(json["date"], "2025-05-01");
        assert_eq!(json["carbonFootprint"], 5.75);

        let back: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(back, activity);
    }

    #[test]
    fn new_activity_from_json() {
        let input: NewActivity = serde_json::from_str(
            r#"{"category":"food","type":"redMeat","value":0.3,"modifiers":{"organic":true,"local":true}}"#,
        )
        .unwrap();
        assert_eq!(input.date, None);

        let activity = Activity::record(input, date!(2025 - 05 - 02)).unwrap();
        assert_eq!(activity.carbon_footprint, 5.83);

        let dated: NewActivity = serde_json::from_str(
            r#"{"category":"home","type":"water","value":200,"date":"2025-04-30"}"#,
        )
        .unwrap();
        assert_eq!(dated.date, Some(date!(2025 - 04 - 30)));
    }

    #[test]
    fn display_names_split_camel_case() {
        assert_eq!(display_name("redMeat"), "Red Meat");
        assert_eq!(display_name("naturalGas"), "Natural Gas");
        assert_eq!(display_name("car"), "Car");
        assert_eq!(display_name(""), "");
    }
}
