mod ids;
mod summary;

pub use ids::*;
pub use summary::*;
