//! Session profile store port (outbound).
//!
//! Defines where each session's [`UserProfile`] lives between requests.

use std::sync::Arc;

use async_trait::async_trait;
use emissions::UserProfile;
use tokio::sync::RwLock;

use crate::domain::models::SessionId;

/// A profile shared between the store and in-flight requests.
pub type SharedProfile = Arc<RwLock<UserProfile>>;

#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// The profile for `session`, if the session is still alive.
    async fn get(&self, session: &SessionId) -> Option<SharedProfile>;

    /// Start tracking `profile` under `session`, replacing any previous one.
    async fn insert(&self, session: SessionId, profile: UserProfile) -> SharedProfile;
}
