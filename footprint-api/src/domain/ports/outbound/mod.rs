mod profile_store;
mod usage_insights;

pub use profile_store::*;
pub use usage_insights::*;
