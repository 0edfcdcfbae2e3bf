use axum::Json;
use emissions::Modifiers;
use serde::Deserialize;
use tracing::instrument;

use crate::adapters::inbound::http::{EstimateResponse, FactorsResponse};

#[instrument(name = "list_factors")]
pub async fn list_factors() -> Json<FactorsResponse> {
    Json(FactorsResponse::current())
}

/// Raw estimator input. Category and type are free-form; anything unknown
/// estimates to zero instead of being rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatePayload {
    category: String,
    #[serde(rename = "type")]
    kind: String,
    value: f64,
    #[serde(default)]
    modifiers: Modifiers,
}

#[instrument(name = "estimate")]
pub async fn estimate(Json(body): Json<EstimatePayload>) -> Json<EstimateResponse> {
    let carbon_footprint =
        emissions::estimate_raw(&body.category, &body.kind, body.value, &body.modifiers);

    Json(EstimateResponse { carbon_footprint })
}
