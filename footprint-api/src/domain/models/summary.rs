//! Read models assembled by the tracker service.

use emissions::{
    baseline::UsageInsights, CategoryBreakdown, Recommendation, SavingsSummary, UserProfile,
};

/// A profile together with the views derived from it.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub profile: UserProfile,
    pub breakdown: CategoryBreakdown,
    /// Everyday comparison for the total footprint.
    pub equivalence: String,
}

impl ProfileSummary {
    pub fn from_profile(profile: UserProfile) -> Self {
        let breakdown = CategoryBreakdown::from_activities(profile.activities());
        let equivalence = emissions::co2_equivalence(profile.total_footprint());
        Self {
            profile,
            breakdown,
            equivalence,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Insights {
    pub recommendations: Vec<Recommendation>,
    pub savings: SavingsSummary,
}

/// Result of the flat usage formula.
#[derive(Debug, Clone)]
pub struct FootprintReport {
    pub base_footprint: f64,
    pub insights: UsageInsights,
}

#[cfg(test)]
mod tests {
    use emissions::{Activity, ActivityCategory, NewActivity};
    use time::macros::date;

    use super::*;

    #[test]
    fn summary_of_sample_profile() {
        let summary = ProfileSummary::from_profile(emissions::sample::sample_profile());
        assert!((summary.breakdown.total - 67.0).abs() < 1e-9);
        assert_eq!(summary.breakdown.shares.len(), 4);
        assert_eq!(summary.equivalence, "Equivalent to a 0 hour flight");
    }

    #[test]
    fn summary_of_empty_profile() {
        let summary = ProfileSummary::from_profile(UserProfile::default());
        assert_eq!(summary.breakdown.percentage_sum(), 0);
        assert_eq!(
            summary.equivalence,
            "Equivalent to charging your smartphone 0 times"
        );
    }

    #[test]
    fn equivalence_follows_total_across_weeks() {
        let day = |d| {
            Activity::record(
                NewActivity::new(ActivityCategory::Consumption, "clothing", 1.0).on(d),
                d,
            )
            .unwrap()
        };
        let profile = UserProfile::default()
            .with_activities([day(date!(2025 - 03 - 01)), day(date!(2025 - 03 - 15))]);
        assert_eq!(profile.weekly_average(), 6.67);

        let summary = ProfileSummary::from_profile(profile);
        assert_eq!(summary.equivalence, "Equivalent to driving a car for 167 km");
    }
}
