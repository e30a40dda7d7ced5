//! Environmental impact of a trip.

use crate::domain::{Rating, TransportMode};

/// Tailpipe CO2 emissions per kilometre, in grams.
pub fn emission_factor_g_per_km(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walking | TransportMode::Cycling => 0.0,
        TransportMode::Bus => 80.0,
        TransportMode::Auto => 120.0,
        TransportMode::Bike => 95.0,
        TransportMode::Car => 180.0,
    }
}

/// CO2 emitted by a trip and how it rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalImpact {
    pub co2_grams: f64,
    pub co2_kg: f64,
    pub eco_rating: Rating,
    /// 0..=100, higher is greener.
    pub eco_score: f64,
}

fn eco_rating(co2_grams: f64) -> Rating {
    if co2_grams == 0.0 {
        Rating::Excellent
    } else if co2_grams < 500.0 {
        Rating::Good
    } else if co2_grams < 1000.0 {
        Rating::Average
    } else {
        Rating::Poor
    }
}

/// Estimate the emissions of travelling `distance_km` by `mode`.
///
/// The eco score loses one point per 20 g of CO2 and is clamped to 0..=100.
pub fn estimate_impact(distance_km: f64, mode: TransportMode) -> EnvironmentalImpact {
    let co2_grams = emission_factor_g_per_km(mode) * distance_km;

    EnvironmentalImpact {
        co2_grams,
        co2_kg: co2_grams / 1000.0,
        eco_rating: eco_rating(co2_grams),
        eco_score: (100.0 - co2_grams / 20.0).clamp(0.0, 100.0),
    }
}
