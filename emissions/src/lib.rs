//! Carbon footprint estimation for logged lifestyle activities.
//!
//! [`estimate`] multiplies a quantity by a static emission factor, adjusted by
//! optional [`Modifiers`]. [`UserProfile`] keeps the logged [`Activity`] list
//! together with totals derived from it, and the remaining modules turn a
//! list of activities into breakdowns, history, chart series and insights.
//!
//! [`baseline`] holds the separate flat three-factor formula used by the
//! backend's usage endpoint.

mod activity;
mod breakdown;
mod category;
mod equivalence;
mod estimator;
mod history;
mod modifiers;
mod profile;
mod recommendations;
mod series;

pub mod baseline;
pub mod factors;
pub mod sample;

pub use activity::*;
pub use breakdown::*;
pub use category::*;
pub use equivalence::*;
pub use estimator::*;
pub use history::*;
pub use modifiers::*;
pub use profile::*;
pub use recommendations::*;
pub use series::*;
