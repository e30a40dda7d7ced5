//! Domain types for the route estimator.
//!
//! This module contains the value types that flow into and out of the
//! estimation engine. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod coordinate;
mod error;
mod mode;
mod preference;
mod rating;
mod time_of_day;

pub use coordinate::Coordinate;
pub use error::DomainError;
pub use mode::TransportMode;
pub use preference::{RoutePreference, TravelPreferences};
pub use rating::Rating;
pub use time_of_day::TimeOfDay;
