//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Coordinate, DomainError, RoutePreference, TimeOfDay, TransportMode, TravelPreferences,
};
use crate::estimate::{
    CostEstimate, EnvironmentalImpact, ModePricingTable, ModeRecommendation, Recommendations,
    RouteRequest, RouteResult, TimeEstimate, format_distance,
};
use crate::journeys::{JourneyPath, Landmark};

/// Request to estimate a single route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRouteRequest {
    /// Origin as `[lat, lng]`
    pub from_coords: Vec<f64>,

    /// Destination as `[lat, lng]`
    pub to_coords: Vec<f64>,

    /// One of walking, cycling, auto, bus, car, bike
    pub transport_mode: String,

    /// Echoed back; defaults to fastest
    pub route_preference: Option<String>,

    /// "peak" or "normal"; derived from the clock when absent
    pub time_of_day: Option<String>,

    pub preferences: Option<PreferencesRequest>,

    /// Display name of the origin, used in directions
    pub from: Option<String>,

    /// Display name of the destination, used in directions
    pub to: Option<String>,
}

impl CalculateRouteRequest {
    /// Validate and convert into an engine request.
    pub fn into_route_request(self) -> Result<RouteRequest, DomainError> {
        let from = Coordinate::from_pair(&self.from_coords)?;
        let to = Coordinate::from_pair(&self.to_coords)?;
        let mode = TransportMode::parse_normalized(&self.transport_mode)?;

        let mut request = RouteRequest::new(from, to, mode).with_names(self.from, self.to);
        if let Some(preference) = self.route_preference.as_deref() {
            request.preference = RoutePreference::parse(preference)?;
        }
        if let Some(time_of_day) = self.time_of_day.as_deref() {
            request = request.with_time_of_day(TimeOfDay::parse(time_of_day)?);
        }
        if let Some(preferences) = self.preferences {
            request = request.with_preferences(preferences.into());
        }
        Ok(request)
    }
}

/// User travel preferences. Missing flags are false.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesRequest {
    pub eco: bool,
    pub budget: bool,
    pub comfort: bool,
}

impl From<PreferencesRequest> for TravelPreferences {
    fn from(p: PreferencesRequest) -> Self {
        TravelPreferences {
            eco: p.eco,
            budget: p.budget,
            comfort: p.comfort,
        }
    }
}

/// Request carrying just two points, for pricing and recommendations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRequest {
    pub from_coords: Vec<f64>,
    pub to_coords: Vec<f64>,
    pub time_of_day: Option<String>,
}

impl PointsRequest {
    /// Validate into origin, destination and optional time bucket.
    pub fn parse(&self) -> Result<(Coordinate, Coordinate, Option<TimeOfDay>), DomainError> {
        let from = Coordinate::from_pair(&self.from_coords)?;
        let to = Coordinate::from_pair(&self.to_coords)?;
        let time_of_day = self
            .time_of_day
            .as_deref()
            .map(TimeOfDay::parse)
            .transpose()?;
        Ok((from, to, time_of_day))
    }
}

/// Query for a landmark-to-landmark journey.
#[derive(Debug, Deserialize)]
pub struct SpecialJourneyQuery {
    /// Origin landmark id
    pub from: String,

    /// Destination landmark id
    pub to: String,

    /// "dijkstra" (default) or "astar"
    pub algorithm: Option<String>,
}

/// Round to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// A distance in km with its display string.
#[derive(Debug, Serialize)]
pub struct DistanceResult {
    pub km: f64,
    pub display: String,
}

impl DistanceResult {
    pub fn from_km(km: f64) -> Self {
        Self {
            km: round_to(km, 2),
            display: format_distance(km),
        }
    }
}

/// Travel, waiting and total minutes.
#[derive(Debug, Serialize)]
pub struct DurationResult {
    pub travel: i64,
    pub waiting: i64,
    pub total: i64,
    pub display: String,
}

impl DurationResult {
    pub fn from_estimate(time: &TimeEstimate) -> Self {
        Self {
            travel: time.travel_minutes,
            waiting: time.waiting_minutes,
            total: time.total_minutes,
            display: time.display(),
        }
    }
}

/// Fare components in rupees.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownResult {
    pub base: i64,
    pub distance: i64,
    /// "N%" above 1x, otherwise "None"
    pub surge: String,
    pub booking: i64,
    pub waiting_per_min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare_cap: Option<i64>,
    pub capped: bool,
}

/// Fare range in rupees.
#[derive(Debug, Serialize)]
pub struct CostResult {
    pub min: i64,
    pub max: i64,
    pub estimated: i64,
    pub display: String,
    pub breakdown: CostBreakdownResult,
}

impl CostResult {
    pub fn from_estimate(cost: &CostEstimate) -> Self {
        let b = &cost.breakdown;
        Self {
            min: cost.min,
            max: cost.max,
            estimated: cost.estimated,
            display: cost.display(),
            breakdown: CostBreakdownResult {
                base: b.base,
                distance: b.distance,
                surge: b.surge_label(),
                booking: b.booking,
                waiting_per_min: b.waiting_per_min,
                fare_cap: b.fare_cap,
                capped: b.capped,
            },
        }
    }
}

/// Route quality.
#[derive(Debug, Serialize)]
pub struct QualityResult {
    pub score: u8,
    pub rating: String,
    pub factors: Vec<String>,
}

/// CO2 output and eco rating.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalResult {
    pub co2_grams: f64,
    pub co2_kg: f64,
    pub eco_rating: String,
    pub eco_score: f64,
}

impl EnvironmentalResult {
    pub fn from_impact(impact: &EnvironmentalImpact) -> Self {
        Self {
            co2_grams: round_to(impact.co2_grams, 1),
            co2_kg: round_to(impact.co2_kg, 3),
            eco_rating: impact.eco_rating.to_string(),
            eco_score: round_to(impact.eco_score, 1),
        }
    }
}

/// A scored transport mode.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub mode: String,
    pub label: String,
    pub score: i64,
    pub recommended: bool,
    pub reason: String,
}

impl RecommendationResult {
    pub fn from_recommendation(rec: &ModeRecommendation) -> Self {
        Self {
            mode: rec.mode.as_str().to_string(),
            label: rec.mode.label().to_string(),
            score: rec.score,
            recommended: rec.recommended,
            reason: rec.reason.to_string(),
        }
    }
}

fn recommendation_results(recs: &[ModeRecommendation]) -> Vec<RecommendationResult> {
    recs.iter()
        .map(RecommendationResult::from_recommendation)
        .collect()
}

/// A fully estimated route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub route_id: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub transport_mode: String,
    pub route_preference: String,
    pub time_of_day: String,
    pub distance: DistanceResult,
    pub duration: DurationResult,
    pub cost: CostResult,
    pub quality: QualityResult,
    pub environmental_impact: EnvironmentalResult,
    pub steps: Vec<String>,
    pub recommendations: Vec<RecommendationResult>,
}

impl RouteResponse {
    pub fn from_result(result: &RouteResult) -> Self {
        Self {
            route_id: result.route_id.to_string(),
            timestamp: result.timestamp.to_rfc3339(),
            transport_mode: result.mode.as_str().to_string(),
            route_preference: result.preference.as_str().to_string(),
            time_of_day: result.time_of_day.as_str().to_string(),
            distance: DistanceResult::from_km(result.distance_km),
            duration: DurationResult::from_estimate(&result.time),
            cost: CostResult::from_estimate(&result.cost),
            quality: QualityResult {
                score: result.quality.score,
                rating: result.quality.rating.to_string(),
                factors: result.quality.factors.clone(),
            },
            environmental_impact: EnvironmentalResult::from_impact(&result.environmental),
            steps: result.steps.clone(),
            recommendations: recommendation_results(&result.recommendations),
        }
    }
}

/// Estimates for one mode in a pricing table.
#[derive(Debug, Serialize)]
pub struct ModePricingResult {
    pub label: String,
    pub cost: CostResult,
    pub time: DurationResult,
    pub environmental: EnvironmentalResult,
    pub recommended: bool,
}

/// Every mode priced between two points, keyed by mode name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub distance: DistanceResult,
    pub time_of_day: String,
    pub modes: BTreeMap<String, ModePricingResult>,
}

impl PricingResponse {
    pub fn from_table(table: &ModePricingTable) -> Self {
        let modes = table
            .modes
            .iter()
            .map(|p| {
                (
                    p.mode.as_str().to_string(),
                    ModePricingResult {
                        label: p.mode.label().to_string(),
                        cost: CostResult::from_estimate(&p.cost),
                        time: DurationResult::from_estimate(&p.time),
                        environmental: EnvironmentalResult::from_impact(&p.environmental),
                        recommended: p.recommended,
                    },
                )
            })
            .collect();

        Self {
            distance: DistanceResult::from_km(table.distance_km),
            time_of_day: table.time_of_day.as_str().to_string(),
            modes,
        }
    }
}

/// All modes ranked, plus the top picks.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub distance: DistanceResult,
    pub time_of_day: String,
    pub ranking: Vec<RecommendationResult>,
    pub top: Vec<RecommendationResult>,
}

impl RecommendationsResponse {
    pub fn from_recommendations(recs: &Recommendations) -> Self {
        Self {
            distance: DistanceResult::from_km(recs.distance_km),
            time_of_day: recs.time_of_day.as_str().to_string(),
            ranking: recommendation_results(&recs.ranking),
            top: recommendation_results(&recs.top),
        }
    }
}

/// A landmark in the special journeys graph.
#[derive(Debug, Serialize)]
pub struct LandmarkResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl LandmarkResult {
    pub fn from_landmark(landmark: &Landmark) -> Self {
        Self {
            id: landmark.id.clone(),
            name: landmark.name.clone(),
            lat: landmark.location.lat(),
            lng: landmark.location.lng(),
        }
    }
}

/// Response listing landmarks.
#[derive(Debug, Serialize)]
pub struct LandmarksResponse {
    pub landmarks: Vec<LandmarkResult>,
}

/// A landmark-to-landmark path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialJourneyResponse {
    pub algorithm: String,
    pub distance: DistanceResult,
    pub path: Vec<LandmarkResult>,
    pub nodes_explored: usize,
}

impl SpecialJourneyResponse {
    pub fn from_path(path: &JourneyPath) -> Self {
        Self {
            algorithm: path.algorithm.as_str().to_string(),
            distance: DistanceResult::from_km(path.distance_km),
            path: path
                .landmarks
                .iter()
                .map(LandmarkResult::from_landmark)
                .collect(),
            nodes_explored: path.nodes_explored,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
