use serde::Serialize;
use thiserror::Error;

use crate::{round_to_cents, Activity, ActivityId};

/// Reduction goal for a fresh profile, in percent.
pub const DEFAULT_TARGET_REDUCTION: f64 = 15.0;

/// Weeks per month used for the monthly average.
const WEEKS_PER_MONTH: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("target reduction must be between 0 and 100 (got {0})")]
    TargetOutOfRange(f64),
}

/// A user's logged activities and the scalars derived from them.
///
/// The derived values are recomputed from the full activity list after every
/// change; nothing is adjusted incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    activities: Vec<Activity>,
    total_footprint: f64,
    weekly_average: f64,
    monthly_average: f64,
    target_reduction: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_REDUCTION)
    }
}

impl UserProfile {
    pub fn new(target_reduction: f64) -> Self {
        Self {
            activities: Vec::new(),
            total_footprint: 0.0,
            weekly_average: 0.0,
            monthly_average: 0.0,
            target_reduction,
        }
    }

    pub fn with_activities(mut self, activities: impl IntoIterator<Item = Activity>) -> Self {
        self.activities.extend(activities);
        self.recompute();
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn total_footprint(&self) -> f64 {
        self.total_footprint
    }

    pub fn weekly_average(&self) -> f64 {
        self.weekly_average
    }

    pub fn monthly_average(&self) -> f64 {
        self.monthly_average
    }

    pub fn target_reduction(&self) -> f64 {
        self.target_reduction
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
        self.recompute();
    }

    /// Remove the activity with `id`, returning it if it was held.
    pub fn remove_activity(&mut self, id: &ActivityId) -> Option<Activity> {
        let position = self.activities.iter().position(|a| &a.id == id)?;
        let removed = self.activities.remove(position);
        self.recompute();
        Some(removed)
    }

    pub fn set_target_reduction(&mut self, percent: f64) -> Result<(), ProfileError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(ProfileError::TargetOutOfRange(percent));
        }
        self.target_reduction = percent;
        Ok(())
    }

    fn recompute(&mut self) {
        self.total_footprint = total_footprint(&self.activities);
        self.weekly_average = round_to_cents(self.total_footprint / weeks_spanned(&self.activities));
        self.monthly_average = round_to_cents(self.weekly_average * WEEKS_PER_MONTH);
    }
}

/// Sum of the cached footprints.
pub fn total_footprint(activities: &[Activity]) -> f64 {
    activities.iter().map(|a| a.carbon_footprint).sum()
}

/// Whole weeks covered by the activity dates, at least one.
fn weeks_spanned(activities: &[Activity]) -> f64 {
    let first = activities.iter().map(|a| a.date).min();
    let last = activities.iter().map(|a| a.date).max();

    match (first, last) {
        (Some(first), Some(last)) => {
            let days = (last - first).whole_days() + 1;
            ((days + 6) / 7).max(1) as f64
        }
        _ => 1.0,
    }
}
