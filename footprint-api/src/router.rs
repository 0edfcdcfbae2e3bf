use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(config: &Settings) -> Router<()> {
    let app_state = AppState::from_settings(config);
    let cors = cors_layer(&config.application.app_url);

    with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// All routes, bound to `app_state`, without the outer layers.
pub fn with_state(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(|| async { "Carbon footprint API is running" }))
        .nest("/api/footprint", routes::footprint::router())
        .nest("/api/auth", routes::auth::router())
        .nest("/api/tracker", routes::tracker::router())
        .with_state(app_state)
}

fn cors_layer(app_url: &str) -> CorsLayer {
    let app_url = app_url.trim_end_matches('/').to_string();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _| origin.as_bytes() == app_url.as_bytes(),
        ))
}
