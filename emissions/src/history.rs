use itertools::Itertools;
use serde::Serialize;
use time::Date;

use crate::{activity::iso_date, profile::total_footprint, Activity};

/// All activities logged on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDay {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub total_footprint: f64,
    pub activities: Vec<Activity>,
}

/// Group activities by day, newest day first. Activities keep their logged
/// order within a day.
pub fn group_by_date(activities: &[Activity]) -> Vec<ActivityDay> {
    activities
        .iter()
        .cloned()
        .into_group_map_by(|a| a.date)
        .into_iter()
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|(date, activities)| ActivityDay {
            date,
            total_footprint: total_footprint(&activities),
            activities,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::{sample, ActivityCategory, ActivityId, NewActivity};

    #[test]
    fn groups_sample_newest_first() {
        let days = group_by_date(&sample::sample_activities());

        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2025 - 05 - 05),
                date!(2025 - 05 - 04),
                date!(2025 - 05 - 03),
                date!(2025 - 05 - 02),
                date!(2025 - 05 - 01),
            ]
        );

        let second = &days[3];
        let ids: Vec<_> = second.activities.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![ActivityId::new("2"), ActivityId::new("3")]);
        assert!((second.total_footprint - 45.6).abs() < 1e-9);
    }

    #[test]
    fn keeps_insertion_order_within_a_day() {
        let day = date!(2025 - 02 - 10);
        let activities: Vec<_> = ["bus", "train", "plane"]
            .into_iter()
            .map(|kind| {
                Activity::record(
                    NewActivity::new(ActivityCategory::Transportation, kind, 10.0),
                    day,
                )
                .unwrap()
            })
            .collect();

        let days = group_by_date(&activities);
        assert_eq!(days.len(), 1);
        let kinds: Vec<_> = days[0].activities.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, vec!["bus", "train", "plane"]);
    }

    #[test]
    fn empty_history() {
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn serializes_date_as_iso_day() {
        let days = group_by_date(&sample::sample_activities());
        let json = serde_json::to_value(&days[0]).unwrap();
        assert_eq!(json["date"], "2025-05-05");
        assert_eq!(json["activities"][0]["id"], "6");
    }
}
