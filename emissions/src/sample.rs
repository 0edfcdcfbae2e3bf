//! The demo profile a new tracker session starts from.

use time::{macros::date, Date};

use crate::{Activity, ActivityCategory, ActivityId, UserProfile, DEFAULT_TARGET_REDUCTION};

fn logged(
    id: &str,
    category: ActivityCategory,
    kind: &str,
    value: f64,
    date: Date,
    carbon_footprint: f64,
) -> Activity {
    Activity {
        id: ActivityId::new(id),
        category,
        kind: kind.to_string(),
        value,
        unit: category.unit_for(kind).to_string(),
        date,
        carbon_footprint,
    }
}

pub fn sample_activities() -> Vec<Activity> {
    use ActivityCategory::*;

    vec![
        logged("1", Transportation, "car", 25.0, date!(2025 - 05 - 01), 5.75),
        logged("2", Home, "electricity", 120.0, date!(2025 - 05 - 02), 38.4),
        logged("3", Food, "redMeat", 0.3, date!(2025 - 05 - 02), 7.2),
        logged("4", Transportation, "bus", 15.0, date!(2025 - 05 - 03), 1.65),
        logged("5", Consumption, "clothing", 1.0, date!(2025 - 05 - 04), 10.0),
        logged("6", Transportation, "train", 100.0, date!(2025 - 05 - 05), 4.0),
    ]
}

pub fn sample_profile() -> UserProfile {
    UserProfile::new(DEFAULT_TARGET_REDUCTION).with_activities(sample_activities())
}
