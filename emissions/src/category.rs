use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::factors;

/// Top-level grouping of a logged activity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ActivityCategory {
    Transportation,
    Home,
    Food,
    Consumption,
}

impl ActivityCategory {
    /// Every category, in display order.
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Transportation,
        ActivityCategory::Home,
        ActivityCategory::Food,
        ActivityCategory::Consumption,
    ];

    /// Human readable label used in breakdowns and chart datasets.
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Transportation => "Transportation",
            ActivityCategory::Home => "Home Energy",
            ActivityCategory::Food => "Food",
            ActivityCategory::Consumption => "Consumption",
        }
    }

    /// Subtypes accepted for this category, default selection first.
    pub fn subtypes(self) -> &'static [&'static str] {
        match self {
            ActivityCategory::Transportation => factors::TRANSPORTATION_SUBTYPES,
            ActivityCategory::Home => factors::HOME_SUBTYPES,
            ActivityCategory::Food => factors::FOOD_SUBTYPES,
            ActivityCategory::Consumption => factors::CONSUMPTION_SUBTYPES,
        }
    }

    pub fn default_subtype(self) -> &'static str {
        self.subtypes()[0]
    }

    pub fn accepts(self, subtype: &str) -> bool {
        self.subtypes().contains(&subtype)
    }

    /// Display unit for a quantity of `subtype` in this category.
    pub fn unit_for(self, subtype: &str) -> &'static str {
        match self {
            ActivityCategory::Transportation => "km",
            ActivityCategory::Home if subtype == "water" => "liters",
            ActivityCategory::Home => "kWh",
            ActivityCategory::Food => "kg",
            ActivityCategory::Consumption => "item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!(
            "transportation".parse::<ActivityCategory>().unwrap(),
            ActivityCategory::Transportation
        );
        assert_eq!(
            "consumption".parse::<ActivityCategory>().unwrap(),
            ActivityCategory::Consumption
        );
        assert!("travel".parse::<ActivityCategory>().is_err());
        assert_eq!(ActivityCategory::Home.to_string(), "home");
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&ActivityCategory::Food).unwrap();
        assert_eq!(json, "\"food\"");

        let parsed: ActivityCategory = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(parsed, ActivityCategory::Home);
    }

    #[test]
    fn units_follow_category_and_subtype() {
        assert_eq!(ActivityCategory::Transportation.unit_for("plane"), "km");
        assert_eq!(ActivityCategory::Home.unit_for("electricity"), "kWh");
        assert_eq!(ActivityCategory::Home.unit_for("water"), "liters");
        assert_eq!(ActivityCategory::Food.unit_for("fish"), "kg");
        assert_eq!(ActivityCategory::Consumption.unit_for("other"), "item");
    }

    #[test]
    fn default_subtype_is_first_option() {
        assert_eq!(ActivityCategory::Transportation.default_subtype(), "car");
        assert_eq!(ActivityCategory::Home.default_subtype(), "electricity");
        assert_eq!(ActivityCategory::Food.default_subtype(), "redMeat");
        assert_eq!(ActivityCategory::Consumption.default_subtype(), "clothing");
    }

    #[test]
    fn accepts_only_listed_subtypes() {
        assert!(ActivityCategory::Transportation.accepts("car"));
        assert!(ActivityCategory::Transportation.accepts("walking"));
        assert!(!ActivityCategory::Transportation.accepts("electricity"));
        assert!(!ActivityCategory::Food.accepts("RedMeat"));
    }
}
