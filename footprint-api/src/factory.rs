//! Composition root: concrete factories for creating service instances.
//!
//! This is the only place that imports concrete outbound adapters.

use std::ops::Add;
use std::sync::Arc;

use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use emissions::UserProfile;
use time::{Duration, OffsetDateTime};

use crate::{
    adapters::{
        inbound::http::TrackerServiceFactory,
        outbound::{memory::MokaProfileStore, rules::RuleBasedInsights},
    },
    config::TrackerSettings,
    domain::{
        models::SessionId,
        ports::{
            inbound::{FootprintService, TrackerService},
            outbound::{ProfileStore, SharedProfile},
        },
        services::{FootprintServiceImpl, TrackerServiceImpl},
        TrackerError,
    },
};

pub const SESSION_COOKIE: &str = "tracker_session";

/// Creates TrackerService instances bound to the caller's session profile.
pub struct SessionTrackerFactory<S = MokaProfileStore> {
    store: Arc<S>,
    settings: TrackerSettings,
    secure_cookies: bool,
}

impl SessionTrackerFactory<MokaProfileStore> {
    pub fn in_memory(settings: TrackerSettings, secure_cookies: bool) -> Self {
        let store = MokaProfileStore::new(
            settings.max_sessions,
            std::time::Duration::from_secs(settings.session_idle_minutes * 60),
        );
        Self::new(Arc::new(store), settings, secure_cookies)
    }
}

impl<S> SessionTrackerFactory<S> {
    pub fn new(store: Arc<S>, settings: TrackerSettings, secure_cookies: bool) -> Self {
        Self {
            store,
            settings,
            secure_cookies,
        }
    }
}

impl<S: ProfileStore> SessionTrackerFactory<S> {
    fn fresh_profile(&self) -> UserProfile {
        let mut profile = if self.settings.seed_sample_data {
            emissions::sample::sample_profile()
        } else {
            UserProfile::default()
        };

        if let Err(e) = profile.set_target_reduction(self.settings.default_target_reduction) {
            tracing::warn!("ignoring configured target reduction: {}", e);
        }
        profile
    }

    /// Load the session named by the cookie, or start a new one.
    async fn resolve_session(&self, jar: &CookieJar) -> (SessionId, SharedProfile) {
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            let session = SessionId::new(cookie.value());
            if let Some(profile) = self.store.get(&session).await {
                return (session, profile);
            }
            tracing::debug!(%session, "unknown or expired session, starting a new one");
        }

        let session = SessionId::generate();
        let profile = self.store.insert(session.clone(), self.fresh_profile()).await;
        tracing::info!(%session, "started tracker session");

        (session, profile)
    }

    fn session_cookie(&self, session: &SessionId, cookie_domain: &str) -> Cookie<'static> {
        let idle = Duration::minutes(self.settings.session_idle_minutes as i64);

        Cookie::build((SESSION_COOKIE, session.as_str().to_owned()))
            .domain(cookie_domain.to_string())
            .path("/")
            .secure(self.secure_cookies)
            .http_only(true)
            .same_site(SameSite::Lax)
            .expires(OffsetDateTime::now_utc().add(idle))
            .build()
    }
}

#[async_trait]
impl<S: ProfileStore> TrackerServiceFactory for SessionTrackerFactory<S> {
    async fn create_service(
        &self,
        jar: CookieJar,
        cookie_domain: &str,
    ) -> Result<(Box<dyn TrackerService>, CookieJar), TrackerError> {
        let (session, profile) = self.resolve_session(&jar).await;

        // Re-issued on every request to slide the expiry along with the idle window.
        let jar = jar.add(self.session_cookie(&session, cookie_domain));

        let today = OffsetDateTime::now_utc().date();
        let service = TrackerServiceImpl::new(profile, today);

        Ok((Box::new(service), jar))
    }
}

pub fn footprint_service() -> Arc<dyn FootprintService> {
    Arc::new(FootprintServiceImpl::new(Arc::new(RuleBasedInsights)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(seed_sample_data: bool) -> SessionTrackerFactory {
        SessionTrackerFactory::in_memory(
            TrackerSettings {
                seed_sample_data,
                ..TrackerSettings::default()
            },
            false,
        )
    }

    #[tokio::test]
    async fn issues_cookie_for_new_session() {
        let factory = factory(true);

        let (service, jar) = factory
            .create_service(CookieJar::new(), "localhost")
            .await
            .unwrap();

        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert!(!cookie.value().is_empty());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));

        let summary = service.profile().await.unwrap();
        assert_eq!(summary.profile.activities().len(), 6);
    }

    #[tokio::test]
    async fn reuses_session_from_cookie() {
        let factory = factory(false);

        let (first, jar) = factory
            .create_service(CookieJar::new(), "localhost")
            .await
            .unwrap();
        let token = jar.get(SESSION_COOKIE).unwrap().value().to_string();
        first
            .add_activity(emissions::NewActivity::new(
                emissions::ActivityCategory::Food,
                "fish",
                1.0,
            ))
            .await
            .unwrap();

        let (second, jar) = factory.create_service(jar, "localhost").await.unwrap();
        assert_eq!(jar.get(SESSION_COOKIE).unwrap().value(), token);
        assert_eq!(second.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_token_starts_empty_session() {
        let factory = factory(false);
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "stale"));

        let (service, jar) = factory.create_service(jar, "localhost").await.unwrap();

        assert_ne!(jar.get(SESSION_COOKIE).unwrap().value(), "stale");
        assert!(service.profile().await.unwrap().profile.is_empty());
    }

    #[tokio::test]
    async fn configured_target_applies_to_new_sessions() {
        let factory = SessionTrackerFactory::in_memory(
            TrackerSettings {
                default_target_reduction: 25.0,
                ..TrackerSettings::default()
            },
            false,
        );

        let (service, _) = factory
            .create_service(CookieJar::new(), "localhost")
            .await
            .unwrap();
        assert_eq!(
            service.profile().await.unwrap().profile.target_reduction(),
            25.0
        );
    }
}
