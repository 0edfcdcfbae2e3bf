mod activities;
mod factors;
mod insights;
mod profile;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::extract::CookieJar;

use super::ApiError;
use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/factors", get(factors::list_factors))
        .route("/estimate", post(factors::estimate))
        .route("/profile", get(profile::get_profile))
        .route("/profile/target", put(profile::set_target_reduction))
        .route(
            "/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route("/activities/:activity_id", delete(activities::delete_activity))
        .route("/insights", get(insights::get_insights))
        .route("/charts", get(insights::get_chart))
}

type CookieJarResult<T> = Result<(CookieJar, T), ApiError>;
