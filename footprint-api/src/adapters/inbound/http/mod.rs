mod responses;
mod tracker;

pub use responses::*;
pub use tracker::TrackerServiceFactory;
