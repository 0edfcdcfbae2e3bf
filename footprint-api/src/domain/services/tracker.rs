use async_trait::async_trait;
use emissions::{Activity, ActivityDay, ActivityId, ChartSeries, NewActivity, Timeframe};
use time::Date;
use tracing::instrument;

use crate::domain::{
    models::{Insights, ProfileSummary},
    ports::{inbound::TrackerService, outbound::SharedProfile},
    TrackerError,
};

/// Implementation of the TrackerService inbound port, bound to one session.
///
/// Reads take the profile's read lock; changes take the write lock, so
/// concurrent requests on the same session apply one at a time.
pub struct TrackerServiceImpl {
    profile: SharedProfile,
    today: Date,
}

impl TrackerServiceImpl {
    pub fn new(profile: SharedProfile, today: Date) -> Self {
        Self { profile, today }
    }
}

#[async_trait]
impl TrackerService for TrackerServiceImpl {
    async fn profile(&self) -> Result<ProfileSummary, TrackerError> {
        let profile = self.profile.read().await;
        Ok(ProfileSummary::from_profile(profile.clone()))
    }

    #[instrument(skip(self))]
    async fn set_target_reduction(&self, percent: f64) -> Result<ProfileSummary, TrackerError> {
        let mut profile = self.profile.write().await;
        profile.set_target_reduction(percent)?;
        Ok(ProfileSummary::from_profile(profile.clone()))
    }

    async fn history(&self) -> Result<Vec<ActivityDay>, TrackerError> {
        let profile = self.profile.read().await;
        Ok(emissions::group_by_date(profile.activities()))
    }

    #[instrument(skip(self))]
    async fn add_activity(&self, input: NewActivity) -> Result<Activity, TrackerError> {
        let activity = Activity::record(input, self.today)?;

        let mut profile = self.profile.write().await;
        profile.add_activity(activity.clone());
        tracing::debug!(
            id = %activity.id,
            footprint = activity.carbon_footprint,
            total = profile.total_footprint(),
            "activity logged"
        );

        Ok(activity)
    }

    #[instrument(skip(self))]
    async fn remove_activity(&self, id: &ActivityId) -> Result<Activity, TrackerError> {
        let mut profile = self.profile.write().await;
        profile
            .remove_activity(id)
            .ok_or_else(|| TrackerError::ActivityNotFound(id.clone()))
    }

    async fn insights(&self) -> Result<Insights, TrackerError> {
        let profile = self.profile.read().await;
        let recommendations = emissions::generate_recommendations(profile.activities());
        let savings = emissions::savings_summary(&recommendations, profile.weekly_average());

        Ok(Insights {
            recommendations,
            savings,
        })
    }

    async fn chart(
        &self,
        timeframe: Timeframe,
        reference: Option<Date>,
    ) -> Result<ChartSeries, TrackerError> {
        let profile = self.profile.read().await;
        Ok(emissions::chart_series(
            profile.activities(),
            timeframe,
            reference.unwrap_or(self.today),
        ))
    }
}
