use async_trait::async_trait;
use emissions::{Activity, ActivityDay, ActivityId, ChartSeries, NewActivity, Timeframe};
use time::Date;

use crate::domain::{
    models::{Insights, ProfileSummary},
    TrackerError,
};

/// Inbound port for the activity tracker.
///
/// A service is created per request and is bound to one session's profile,
/// so no session identifier is passed to the methods.
#[async_trait]
pub trait TrackerService: Send + Sync + 'static {
    /// The profile with its category breakdown.
    async fn profile(&self) -> Result<ProfileSummary, TrackerError>;

    /// Change the reduction goal, in percent (0 to 100).
    async fn set_target_reduction(&self, percent: f64) -> Result<ProfileSummary, TrackerError>;

    /// Logged activities grouped by day, newest first.
    async fn history(&self) -> Result<Vec<ActivityDay>, TrackerError>;

    /// Validate, estimate and append a new activity.
    async fn add_activity(&self, input: NewActivity) -> Result<Activity, TrackerError>;

    async fn remove_activity(&self, id: &ActivityId) -> Result<Activity, TrackerError>;

    /// Recommendations and what following them would save.
    async fn insights(&self) -> Result<Insights, TrackerError>;

    /// Chart series as seen on `reference`, or today when `None`.
    async fn chart(
        &self,
        timeframe: Timeframe,
        reference: Option<Date>,
    ) -> Result<ChartSeries, TrackerError>;
}
