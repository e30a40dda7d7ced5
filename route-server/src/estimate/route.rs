//! Full route estimation: one entry point composing every model.

use chrono::{DateTime, Local, Timelike, Utc};
use tracing::debug;
use uuid::Uuid;

use super::config::EstimatorConfig;
use super::cost::{CostEstimate, estimate_cost};
use super::distance::distance_km;
use super::environment::{EnvironmentalImpact, estimate_impact};
use super::quality::{QualityScore, score_route};
use super::recommend::{ModeRecommendation, rank_modes, recommend_mode, top_recommendations};
use super::steps::generate_steps;
use super::time::{TimeEstimate, estimate_time};
use crate::domain::{Coordinate, RoutePreference, TimeOfDay, TransportMode, TravelPreferences};

/// Request to estimate a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub from: Coordinate,
    pub to: Coordinate,
    pub mode: TransportMode,
    pub preference: RoutePreference,
    /// Derived from the wall clock when absent.
    pub time_of_day: Option<TimeOfDay>,
    pub preferences: Option<TravelPreferences>,
    /// Display name of the origin, if the user picked a named place.
    pub from_name: Option<String>,
    /// Display name of the destination.
    pub to_name: Option<String>,
}

impl RouteRequest {
    /// Create a request with default preference and no optional fields.
    pub fn new(from: Coordinate, to: Coordinate, mode: TransportMode) -> Self {
        Self {
            from,
            to,
            mode,
            preference: RoutePreference::default(),
            time_of_day: None,
            preferences: None,
            from_name: None,
            to_name: None,
        }
    }

    /// Set an explicit time-of-day bucket.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Set user preferences.
    pub fn with_preferences(mut self, preferences: TravelPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Set display names for the endpoints.
    pub fn with_names(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from_name = from;
        self.to_name = to;
        self
    }

    fn from_label(&self) -> String {
        self.from_name.clone().unwrap_or_else(|| self.from.to_string())
    }

    fn to_label(&self) -> String {
        self.to_name.clone().unwrap_or_else(|| self.to.to_string())
    }
}

/// A fully estimated route. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub route_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub mode: TransportMode,
    pub preference: RoutePreference,
    /// The bucket actually used (explicit or derived).
    pub time_of_day: TimeOfDay,
    pub distance_km: f64,
    pub cost: CostEstimate,
    pub time: TimeEstimate,
    pub quality: QualityScore,
    pub environmental: EnvironmentalImpact,
    pub steps: Vec<String>,
    /// Best modes for this pair of points, best first.
    pub recommendations: Vec<ModeRecommendation>,
}

/// Pricing for one mode in a side-by-side comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ModePricing {
    pub mode: TransportMode,
    pub cost: CostEstimate,
    pub time: TimeEstimate,
    pub environmental: EnvironmentalImpact,
    pub recommended: bool,
}

/// Pricing for every mode between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct ModePricingTable {
    pub distance_km: f64,
    pub time_of_day: TimeOfDay,
    /// One entry per mode, in [`TransportMode::ALL`] order.
    pub modes: Vec<ModePricing>,
}

/// Mode ranking between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub distance_km: f64,
    pub time_of_day: TimeOfDay,
    /// Every mode, best first.
    pub ranking: Vec<ModeRecommendation>,
    /// Recommended modes only, capped at the configured limit.
    pub top: Vec<ModeRecommendation>,
}

/// Stateless route estimator.
///
/// Holds only configuration, so a single instance can be shared across
/// request handlers.
#[derive(Debug, Clone, Default)]
pub struct RouteEstimator {
    config: EstimatorConfig,
}

impl RouteEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Use the explicit bucket, or derive one from the local hour.
    pub fn resolve_time_of_day(
        &self,
        explicit: Option<TimeOfDay>,
        now: DateTime<Local>,
    ) -> TimeOfDay {
        explicit.unwrap_or_else(|| self.config.time_of_day_at(now.hour()))
    }

    /// Estimate a route as of now.
    pub fn compute_route(&self, request: &RouteRequest) -> RouteResult {
        self.compute_route_at(request, Local::now())
    }

    /// Estimate a route as of `now`.
    ///
    /// `now` only affects the derived time of day and the timestamp.
    #[tracing::instrument(skip(self, request, now), fields(mode = %request.mode))]
    pub fn compute_route_at(&self, request: &RouteRequest, now: DateTime<Local>) -> RouteResult {
        let time_of_day = self.resolve_time_of_day(request.time_of_day, now);
        let distance = distance_km(&request.from, &request.to);
        let mode = request.mode;

        debug!(distance_km = distance, %time_of_day, "estimating route");

        let ranking = rank_modes(distance, time_of_day);

        RouteResult {
            route_id: Uuid::new_v4(),
            timestamp: now.with_timezone(&Utc),
            mode,
            preference: request.preference,
            time_of_day,
            distance_km: distance,
            cost: estimate_cost(distance, mode, time_of_day),
            time: estimate_time(distance, mode, time_of_day),
            quality: score_route(distance, mode, time_of_day, request.preferences.as_ref()),
            environmental: estimate_impact(distance, mode),
            steps: generate_steps(&request.from_label(), &request.to_label(), mode, distance),
            recommendations: top_recommendations(&ranking, self.config.max_recommendations),
        }
    }

    /// Price every mode between two points.
    #[tracing::instrument(skip(self))]
    pub fn compute_all_mode_pricing(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        time_of_day: Option<TimeOfDay>,
    ) -> ModePricingTable {
        let time_of_day = self.resolve_time_of_day(time_of_day, Local::now());
        let distance = distance_km(from, to);

        let modes = TransportMode::ALL
            .into_iter()
            .map(|mode| ModePricing {
                mode,
                cost: estimate_cost(distance, mode, time_of_day),
                time: estimate_time(distance, mode, time_of_day),
                environmental: estimate_impact(distance, mode),
                recommended: recommend_mode(mode, distance, time_of_day).recommended,
            })
            .collect();

        ModePricingTable {
            distance_km: distance,
            time_of_day,
            modes,
        }
    }

    /// Rank every mode between two points.
    #[tracing::instrument(skip(self))]
    pub fn recommendations(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        time_of_day: Option<TimeOfDay>,
    ) -> Recommendations {
        let time_of_day = self.resolve_time_of_day(time_of_day, Local::now());
        let distance = distance_km(from, to);
        let ranking = rank_modes(distance, time_of_day);
        let top = top_recommendations(&ranking, self.config.max_recommendations);

        Recommendations {
            distance_km: distance,
            time_of_day,
            ranking,
            top,
        }
    }
}
