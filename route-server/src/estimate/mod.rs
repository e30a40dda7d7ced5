//! Route estimation engine.
//!
//! Given two coordinates and a transport mode, estimates distance, fare,
//! travel time, environmental impact and a route quality score. There is
//! no road graph: every figure is a closed-form function of the
//! great-circle distance, the mode and a peak/normal time bucket.
//!
//! All functions are pure apart from [`RouteEstimator`], which stamps
//! results with an id and timestamp and reads the wall clock when no time
//! bucket is given.

mod config;
mod cost;
mod distance;
mod environment;
mod quality;
mod recommend;
mod route;
mod steps;
mod time;

pub use config::{EstimatorConfig, PeakWindow};
pub use cost::{CostBreakdown, CostEstimate, Tariff, estimate_cost};
pub use distance::{EARTH_RADIUS_KM, distance_km, format_distance};
pub use environment::{EnvironmentalImpact, emission_factor_g_per_km, estimate_impact};
pub use quality::{QualityScore, score_route};
pub use recommend::{
    ModeRecommendation, RECOMMENDED_THRESHOLD, rank_modes, recommend_mode, top_recommendations,
};
pub use route::{
    ModePricing, ModePricingTable, Recommendations, RouteEstimator, RouteRequest, RouteResult,
};
pub use steps::generate_steps;
pub use time::{TimeEstimate, average_speed_kmh, estimate_time, format_minutes, waiting_minutes};
