//! In-memory session store backed by a moka cache.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use emissions::UserProfile;
use moka::sync::Cache;
use tokio::sync::RwLock;

use crate::domain::{
    models::SessionId,
    ports::outbound::{ProfileStore, SharedProfile},
};

/// Keeps each session's profile in memory.
///
/// Entries are evicted after `idle` without access or when the cache grows
/// past `max_sessions`. Nothing survives a restart.
#[derive(Clone)]
pub struct MokaProfileStore {
    sessions: Cache<SessionId, SharedProfile>,
}

impl MokaProfileStore {
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .build();
        Self { sessions }
    }
}

#[async_trait]
impl ProfileStore for MokaProfileStore {
    async fn get(&self, session: &SessionId) -> Option<SharedProfile> {
        self.sessions.get(session)
    }

    async fn insert(&self, session: SessionId, profile: UserProfile) -> SharedProfile {
        let shared = Arc::new(RwLock::new(profile));
        self.sessions.insert(session, shared.clone());
        shared
    }
}
