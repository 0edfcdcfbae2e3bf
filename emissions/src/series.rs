//! Chart series derived from logged activities.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{Date, Duration};

use crate::{round_to_cents, Activity, ActivityCategory};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKS_IN_MONTH_VIEW: i64 = 4;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub timeframe: Timeframe,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Build the series for `timeframe` as seen on `reference`.
///
/// - week: Mon..Sun of the week containing `reference`, one dataset per category
/// - month: the four 7-day windows ending on `reference`, oldest first
/// - year: Jan..Dec of `reference`'s year
pub fn chart_series(activities: &[Activity], timeframe: Timeframe, reference: Date) -> ChartSeries {
    match timeframe {
        Timeframe::Week => week_series(activities, reference),
        Timeframe::Month => month_series(activities, reference),
        Timeframe::Year => year_series(activities, reference),
    }
}

fn week_series(activities: &[Activity], reference: Date) -> ChartSeries {
    let monday =
        reference - Duration::days(reference.weekday().number_days_from_monday() as i64);
    let days: Vec<Date> = (0..7).map(|i| monday + Duration::days(i)).collect();

    let datasets = ActivityCategory::ALL
        .into_iter()
        .map(|category| ChartDataset {
            label: category.label().to_string(),
            data: days
                .iter()
                .map(|day| {
                    sum_where(activities, |a| a.category == category && a.date == *day)
                })
                .collect(),
        })
        .collect();

    ChartSeries {
        timeframe: Timeframe::Week,
        labels: WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
        datasets,
    }
}

fn month_series(activities: &[Activity], reference: Date) -> ChartSeries {
    let data = (0..WEEKS_IN_MONTH_VIEW)
        .map(|week| {
            let weeks_back = WEEKS_IN_MONTH_VIEW - 1 - week;
            let end = reference - Duration::weeks(weeks_back);
            let start = end - Duration::days(6);
            sum_where(activities, |a| a.date >= start && a.date <= end)
        })
        .collect();

    ChartSeries {
        timeframe: Timeframe::Month,
        labels: (1..=WEEKS_IN_MONTH_VIEW)
            .map(|week| format!("Week {week}"))
            .collect(),
        datasets: vec![ChartDataset {
            label: "Total Emissions".to_string(),
            data,
        }],
    }
}

fn year_series(activities: &[Activity], reference: Date) -> ChartSeries {
    let year = reference.year();
    let data = (1..=12u8)
        .map(|month| {
            sum_where(activities, |a| {
                a.date.year() == year && u8::from(a.date.month()) == month
            })
        })
        .collect();

    ChartSeries {
        timeframe: Timeframe::Year,
        labels: MONTH_LABELS.iter().map(|l| l.to_string()).collect(),
        datasets: vec![ChartDataset {
            label: "Monthly Emissions".to_string(),
            data,
        }],
    }
}

fn sum_where(activities: &[Activity], predicate: impl Fn(&Activity) -> bool) -> f64 {
    round_to_cents(
        activities
            .iter()
            .filter(|a| predicate(a))
            .map(|a| a.carbon_footprint)
            .sum(),
    )
}
