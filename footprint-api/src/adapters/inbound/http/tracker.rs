//! HTTP adapter for the activity tracker.
//!
//! Defines the factory trait for creating TrackerService instances from HTTP requests.
//! The concrete implementation lives in `crate::factory` (the composition root).

use async_trait::async_trait;
use axum_extra::extract::CookieJar;

use crate::domain::{ports::inbound::TrackerService, TrackerError};

/// Factory trait for creating TrackerService instances from HTTP cookies.
///
/// The session cookie selects the profile the service works on. When the
/// cookie is missing or names an expired session, a new session is started
/// and the returned jar carries its cookie.
#[async_trait]
pub trait TrackerServiceFactory: Send + Sync + 'static {
    async fn create_service(
        &self,
        jar: CookieJar,
        cookie_domain: &str,
    ) -> Result<(Box<dyn TrackerService>, CookieJar), TrackerError>;
}
