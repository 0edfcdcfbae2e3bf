use serde::Serialize;

use crate::{profile::total_footprint, Activity, ActivityCategory};

/// One category's part of the total footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: ActivityCategory,
    pub label: &'static str,
    pub footprint: f64,
    pub percentage: u32,
}

/// Footprint partitioned by category. Every category is present, in
/// [`ActivityCategory::ALL`] order, even when it has no activities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub total: f64,
    pub shares: Vec<CategoryShare>,
}

impl CategoryBreakdown {
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total = total_footprint(activities);

        let shares = ActivityCategory::ALL
            .into_iter()
            .map(|category| {
                let footprint = activities
                    .iter()
                    .filter(|a| a.category == category)
                    .map(|a| a.carbon_footprint)
                    .sum();
                CategoryShare {
                    category,
                    label: category.label(),
                    footprint,
                    percentage: percentage_of(footprint, total),
                }
            })
            .collect();

        Self { total, shares }
    }

    pub fn get(&self, category: ActivityCategory) -> Option<&CategoryShare> {
        self.shares.iter().find(|s| s.category == category)
    }

    pub fn percentage_sum(&self) -> u32 {
        self.shares.iter().map(|s| s.percentage).sum()
    }
}

/// `part` as a whole percentage of `total`; 0 when there is no total.
pub fn percentage_of(part: f64, total: f64) -> u32 {
    if total > 0.0 {
        (part / total * 100.0).round() as u32
    } else {
        0
    }
}
