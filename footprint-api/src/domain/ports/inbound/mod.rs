mod footprint;
mod tracker;

pub use footprint::*;
pub use tracker::*;
