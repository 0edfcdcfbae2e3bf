use emissions::{ActivityError, ActivityId, ProfileError};
use thiserror::Error;

/// Errors that can occur while working on a session's tracker profile.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    InvalidActivity(#[from] ActivityError),
    #[error(transparent)]
    InvalidTarget(#[from] ProfileError),
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),
}

/// Errors from the usage insight step of the footprint endpoint.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("usage figures must be finite numbers")]
    InvalidUsage,
}
