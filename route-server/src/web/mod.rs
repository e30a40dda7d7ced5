//! Web layer for the route estimator.
//!
//! Provides JSON endpoints for route estimates, mode pricing,
//! recommendations and landmark journeys.

mod dto;
mod middleware;
mod routes;
mod state;

pub use dto::*;
pub use middleware::{REMAINING_HEADER, client_key, rate_limit};
pub use routes::create_router;
pub use state::AppState;
