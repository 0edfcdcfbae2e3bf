//! Account endpoints. Accounts are not supported yet; both routes answer 501.

use axum::{routing::post, Router};
use tracing::instrument;

use super::ApiError;
use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(name = "register")]
async fn register() -> ApiError {
    ApiError::not_implemented("registration is not available")
}

#[instrument(name = "login")]
async fn login() -> ApiError {
    ApiError::not_implemented("login is not available")
}
