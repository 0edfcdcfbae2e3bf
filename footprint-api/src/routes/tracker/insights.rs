use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::CookieJar;
use emissions::{iso_date, ChartSeries, Timeframe};
use serde::Deserialize;
use time::Date;
use tracing::instrument;

use super::CookieJarResult;
use crate::{adapters::inbound::http::InsightsResponse, app_state::AppState};

#[instrument(name = "get_insights", skip(jar, app_state))]
pub async fn get_insights(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> CookieJarResult<Json<InsightsResponse>> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let insights = service.insights().await?;

    Ok((jar, Json(InsightsResponse::from(insights))))
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    timeframe: Timeframe,
    /// Reference day, defaults to today.
    #[serde(default, with = "iso_date::option")]
    date: Option<Date>,
}

#[instrument(name = "get_chart", skip(jar, app_state))]
pub async fn get_chart(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> CookieJarResult<Json<ChartSeries>> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let series = service.chart(query.timeframe, query.date).await?;

    Ok((jar, Json(series)))
}
