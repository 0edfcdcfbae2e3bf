use std::sync::Arc;

use crate::{
    adapters::inbound::http::TrackerServiceFactory,
    config::Settings,
    domain::ports::inbound::FootprintService,
    factory::{self, SessionTrackerFactory},
};

#[derive(Clone)]
pub struct AppState {
    pub cookie_domain: String,
    pub tracker_factory: Arc<dyn TrackerServiceFactory>,
    pub footprint_service: Arc<dyn FootprintService>,
}

impl AppState {
    pub fn new(
        cookie_domain: String,
        tracker_factory: Arc<dyn TrackerServiceFactory>,
        footprint_service: Arc<dyn FootprintService>,
    ) -> Self {
        Self {
            cookie_domain,
            tracker_factory,
            footprint_service,
        }
    }

    /// Wire the in-memory session store and rule-based insights from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let tracker_factory = SessionTrackerFactory::in_memory(
            settings.tracker.clone(),
            settings.application.secure_cookies,
        );

        Self::new(
            settings.application.cookie_domain.clone(),
            Arc::new(tracker_factory),
            factory::footprint_service(),
        )
    }
}
