pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod footprint;
pub(crate) mod tracker;

pub(crate) use error::ApiError;
