use axum::{extract::State, routing::post, Json, Router};
use emissions::baseline::BaselineUsage;
use tracing::instrument;

use super::ApiError;
use crate::{adapters::inbound::http::FootprintResponse, app_state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/get", post(get_footprint))
}

#[instrument(name = "get_footprint", skip(app_state))]
async fn get_footprint(
    State(app_state): State<AppState>,
    Json(usage): Json<BaselineUsage>,
) -> Result<Json<FootprintResponse>, ApiError> {
    let report = app_state.footprint_service.footprint(&usage).await?;

    Ok(Json(FootprintResponse::from(report)))
}
