use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{breakdown::percentage_of, Activity, ActivityCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A suggested change and its estimated weekly saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category: ActivityCategory,
    pub title: String,
    pub description: String,
    /// kg CO₂e
    pub potential_impact: f64,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recommendation {
    fn canned(
        id: &str,
        category: ActivityCategory,
        title: &str,
        description: &str,
        potential_impact: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            title: title.to_string(),
            description: description.to_string(),
            potential_impact,
            difficulty,
            image_url: None,
        }
    }
}

/// Recommendations for a set of activities.
///
/// There is no analysis behind this: the same canned set comes back for any input.
pub fn generate_recommendations(_activities: &[Activity]) -> Vec<Recommendation> {
    sample_recommendations()
}

pub fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::canned(
            "1",
            ActivityCategory::Transportation,
            "Switch to Public Transport",
            "Try replacing car trips with public transportation. A single bus can replace dozens of cars, significantly reducing carbon emissions per passenger.",
            2.5,
            Difficulty::Medium,
        ),
        Recommendation::canned(
            "2",
            ActivityCategory::Home,
            "Switch to LED Light Bulbs",
            "Replace conventional light bulbs with LED alternatives. They use up to 90% less energy and last much longer.",
            0.3,
            Difficulty::Easy,
        ),
        Recommendation::canned(
            "3",
            ActivityCategory::Food,
            "Reduce Red Meat Consumption",
            "Try having meat-free days each week. Red meat has one of the highest carbon footprints of all foods.",
            6.0,
            Difficulty::Medium,
        ),
        Recommendation::canned(
            "4",
            ActivityCategory::Consumption,
            "Buy Second-hand Clothing",
            "Next time you need clothes, consider second-hand options. Manufacturing new clothes has a large carbon footprint.",
            8.0,
            Difficulty::Easy,
        ),
        Recommendation::canned(
            "5",
            ActivityCategory::Home,
            "Install a Smart Thermostat",
            "Smart thermostats can significantly reduce your heating and cooling energy use by optimizing temperature settings.",
            5.2,
            Difficulty::Medium,
        ),
    ]
}

/// What following every recommendation would save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    /// kg CO₂e per week
    pub potential_savings: f64,
    /// Share of the weekly average, 0 when there is no average yet.
    pub potential_percentage: u32,
}

pub fn savings_summary(recommendations: &[Recommendation], weekly_average: f64) -> SavingsSummary {
    let potential_savings = recommendations.iter().map(|r| r.potential_impact).sum();
    SavingsSummary {
        potential_savings,
        potential_percentage: percentage_of(potential_savings, weekly_average),
    }
}
