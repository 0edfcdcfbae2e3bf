mod footprint;
mod tracker;

pub use footprint::FootprintServiceImpl;
pub use tracker::TrackerServiceImpl;
