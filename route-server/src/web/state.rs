//! Application state for the web layer.

use std::sync::Arc;

use crate::estimate::RouteEstimator;
use crate::journeys::LandmarkGraph;
use crate::ratelimit::RateLimiter;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route estimation engine
    pub estimator: Arc<RouteEstimator>,

    /// Landmark graph for special journeys
    pub landmarks: Arc<LandmarkGraph>,

    /// Per-client request limiter for the API routes
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(estimator: RouteEstimator, landmarks: LandmarkGraph, limiter: RateLimiter) -> Self {
        Self {
            estimator: Arc::new(estimator),
            landmarks: Arc::new(landmarks),
            limiter: Arc::new(limiter),
        }
    }
}
