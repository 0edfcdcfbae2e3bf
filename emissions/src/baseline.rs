//! The backend's flat three-factor formula.
//!
//! This is a separate, coarser model than [`estimate`](crate::estimate): it
//! takes aggregate usage numbers instead of categorized activities, and the
//! two are not reconciled.

use serde::{Deserialize, Serialize};

use crate::round_to_cents;

/// kg CO₂e per km travelled.
pub const KM_FACTOR: f64 = 0.21;
/// kg CO₂e per kWh used.
pub const KWH_FACTOR: f64 = 0.5;
/// kg CO₂e per unit of food consumed.
pub const FOOD_FACTOR: f64 = 1.2;

/// Above this distance the suggestion is to use public transport.
pub const HIGH_TRAVEL_KM: f64 = 50.0;
/// Above this consumption the risk level is high.
pub const HIGH_ENERGY_KWH: f64 = 100.0;

/// Aggregate usage figures. Missing fields count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaselineUsage {
    pub km_travelled: f64,
    pub kwh_used: f64,
    pub food_consumption: f64,
}

impl BaselineUsage {
    pub fn new(km_travelled: f64, kwh_used: f64, food_consumption: f64) -> Self {
        Self {
            km_travelled,
            kwh_used,
            food_consumption,
        }
    }
}

/// `km × 0.21 + kWh × 0.5 + food × 1.2`, rounded to two decimals.
pub fn base_footprint(usage: &BaselineUsage) -> f64 {
    let transport = usage.km_travelled * KM_FACTOR;
    let electricity = usage.kwh_used * KWH_FACTOR;
    let food = usage.food_consumption * FOOD_FACTOR;

    round_to_cents(transport + electricity + food)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

/// Rule-based feedback on a [`BaselineUsage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageInsights {
    pub suggestion: String,
    pub risk_level: RiskLevel,
}

pub fn usage_insights(usage: &BaselineUsage) -> UsageInsights {
    let suggestion = if usage.km_travelled > HIGH_TRAVEL_KM {
        "Consider using public transport or carpooling to reduce your footprint."
    } else {
        "Great job keeping your travel emissions low!"
    };
    let risk_level = if usage.kwh_used > HIGH_ENERGY_KWH {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    UsageInsights {
        suggestion: suggestion.to_string(),
        risk_level,
    }
}
