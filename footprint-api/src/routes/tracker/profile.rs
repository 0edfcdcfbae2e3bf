use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::instrument;

use super::CookieJarResult;
use crate::{adapters::inbound::http::ProfileResponse, app_state::AppState};

#[instrument(name = "get_profile", skip(jar, app_state))]
pub async fn get_profile(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> CookieJarResult<Json<ProfileResponse>> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let summary = service.profile().await?;

    Ok((jar, Json(ProfileResponse::from(summary))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReductionPayload {
    target_reduction: f64,
}

#[instrument(name = "set_target_reduction", skip(jar, app_state))]
pub async fn set_target_reduction(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Json(body): Json<TargetReductionPayload>,
) -> CookieJarResult<Json<ProfileResponse>> {
    let (service, jar) = app_state
        .tracker_factory
        .create_service(jar, &app_state.cookie_domain)
        .await?;

    let summary = service.set_target_reduction(body.target_reduction).await?;

    Ok((jar, Json(ProfileResponse::from(summary))))
}
