use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use emissions::{Activity, ActivityDay, ActivityId, NewActivity};
use tracing::instrument;

use super::CookieJarResult;
use crate::app_state::AppState;

#[instrument(name = "list_activities", skip(jar, app_state))]
pub async fn list_activities(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> CookieJarResult<Json<Vec<ActivityDay>>> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let days = service.history().await?;

    Ok((jar, Json(days)))
}

#[instrument(name = "create_activity", skip(jar, app_state))]
pub async fn create_activity(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Json(body): Json<NewActivity>,
) -> CookieJarResult<(StatusCode, Json<Activity>)> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let activity = service.add_activity(body).await?;

    Ok((jar, (StatusCode::CREATED, Json(activity))))
}

#[instrument(name = "delete_activity", skip(jar, app_state))]
pub async fn delete_activity(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Path(activity_id): Path<String>,
) -> CookieJarResult<StatusCode> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    service.remove_activity(&ActivityId::from(activity_id)).await?;

    Ok((jar, StatusCode::NO_CONTENT))
}
