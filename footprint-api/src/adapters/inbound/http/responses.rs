//! HTTP response types for the tracker and footprint endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use emissions::{
    baseline::UsageInsights, factors, ActivityCategory, CategoryBreakdown, Recommendation,
    UserProfile,
};
use serde::Serialize;

use crate::domain::models::{FootprintReport, Insights, ProfileSummary};

/// Response for `POST /api/footprint/get`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResponse {
    pub base_footprint: f64,
    pub ai_insights: UsageInsights,
}

impl From<FootprintReport> for FootprintResponse {
    fn from(report: FootprintReport) -> Self {
        Self {
            base_footprint: report.base_footprint,
            ai_insights: report.insights,
        }
    }
}

/// Profile with its derived views, flattened into one object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub breakdown: CategoryBreakdown,
    pub equivalence: String,
}

impl From<ProfileSummary> for ProfileResponse {
    fn from(summary: ProfileSummary) -> Self {
        Self {
            profile: summary.profile,
            breakdown: summary.breakdown,
            equivalence: summary.equivalence,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub recommendations: Vec<Recommendation>,
    /// kg CO₂e per week.
    pub potential_savings: f64,
    pub potential_percentage: u32,
}

impl From<Insights> for InsightsResponse {
    fn from(insights: Insights) -> Self {
        Self {
            recommendations: insights.recommendations,
            potential_savings: insights.savings.potential_savings,
            potential_percentage: insights.savings.potential_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub carbon_footprint: f64,
}

/// One selectable subtype in the activity form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtypeResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: String,
    pub unit: &'static str,
    /// `None` for car, whose factor depends on the fuel type.
    pub factor: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFactorsResponse {
    pub category: ActivityCategory,
    pub label: &'static str,
    pub default_type: &'static str,
    pub subtypes: Vec<SubtypeResponse>,
}

impl From<ActivityCategory> for CategoryFactorsResponse {
    fn from(category: ActivityCategory) -> Self {
        let table = factors::factors_for(category);
        Self {
            category,
            label: category.label(),
            default_type: category.default_subtype(),
            subtypes: category
                .subtypes()
                .iter()
                .map(|&kind| SubtypeResponse {
                    kind,
                    label: emissions::display_name(kind),
                    unit: category.unit_for(kind),
                    factor: table.get(kind),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelFactorResponse {
    pub fuel_type: &'static str,
    pub factor: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorsResponse {
    pub categories: Vec<CategoryFactorsResponse>,
    pub car_fuel_factors: Vec<FuelFactorResponse>,
    pub default_fuel_type: &'static str,
}

impl FactorsResponse {
    pub fn current() -> Self {
        Self {
            categories: ActivityCategory::ALL
                .into_iter()
                .map(CategoryFactorsResponse::from)
                .collect(),
            car_fuel_factors: factors::CAR_FUEL_FACTORS
                .entries()
                .iter()
                .map(|&(fuel_type, factor)| FuelFactorResponse { fuel_type, factor })
                .collect(),
            default_fuel_type: factors::DEFAULT_FUEL_TYPE,
        }
    }
}
