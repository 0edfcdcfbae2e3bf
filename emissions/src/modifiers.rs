use serde::{Deserialize, Serialize};

/// Optional per-activity adjustments applied to the base emission factor.
///
/// Which fields matter depends on the category; the rest are ignored. An
/// absent field never adjusts anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifiers {
    /// Car fuel type (`gasoline`, `diesel`, `electric`, `hybrid`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Transportation only. Values above 1 divide the factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<f64>,
    /// Home electricity from renewable sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    /// Consumption only. Only an explicit `false` (second-hand) adjusts.
    #[serde(rename = "new", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_passengers(mut self, passengers: f64) -> Self {
        self.passengers = Some(passengers);
        self
    }

    pub fn with_renewable(mut self, renewable: bool) -> Self {
        self.renewable = Some(renewable);
        self
    }

    pub fn with_organic(mut self, organic: bool) -> Self {
        self.organic = Some(organic);
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = Some(local);
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    pub fn is_second_hand(&self) -> bool {
        self.is_new == Some(false)
    }
}
