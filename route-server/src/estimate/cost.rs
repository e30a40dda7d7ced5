//! Fare estimation.
//!
//! Fares are a flat formula over a per-mode tariff:
//! `base + distance * per_km * surge + booking`, clamped to the fare cap
//! where the mode has one. The quoted range is the estimate ±20%.

use crate::domain::{TimeOfDay, TransportMode};

/// Fraction either side of the estimate used for the quoted range.
const FARE_SPREAD: f64 = 0.2;

/// Static pricing parameters for one transport mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// Flag-fall charged on every trip.
    pub base_fare: f64,
    /// Rate per kilometre before surge.
    pub per_km: f64,
    /// Multiplier applied in peak hours.
    pub peak_surge: f64,
    /// Multiplier applied outside peak hours.
    pub off_peak_surge: f64,
    /// Platform booking fee added after surge.
    pub booking_fee: f64,
    /// Maximum fare, if regulated.
    pub fare_cap: Option<f64>,
    /// Waiting charge per minute. Informational only, never added to the fare.
    pub waiting_per_min: f64,
}

impl Tariff {
    const FREE: Tariff = Tariff {
        base_fare: 0.0,
        per_km: 0.0,
        peak_surge: 1.0,
        off_peak_surge: 1.0,
        booking_fee: 0.0,
        fare_cap: None,
        waiting_per_min: 0.0,
    };

    /// The tariff for a mode.
    pub fn for_mode(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Walking | TransportMode::Cycling => Self::FREE,
            TransportMode::Auto => Tariff {
                base_fare: 25.0,
                per_km: 12.0,
                peak_surge: 1.5,
                waiting_per_min: 2.0,
                ..Self::FREE
            },
            TransportMode::Bus => Tariff {
                base_fare: 8.0,
                per_km: 2.0,
                fare_cap: Some(45.0),
                ..Self::FREE
            },
            TransportMode::Car => Tariff {
                base_fare: 60.0,
                per_km: 15.0,
                peak_surge: 1.8,
                off_peak_surge: 1.2,
                booking_fee: 10.0,
                ..Self::FREE
            },
            TransportMode::Bike => Tariff {
                base_fare: 20.0,
                per_km: 8.0,
                peak_surge: 1.3,
                waiting_per_min: 1.0,
                ..Self::FREE
            },
        }
    }

    /// Surge multiplier for the given time bucket.
    pub fn surge(&self, time_of_day: TimeOfDay) -> f64 {
        match time_of_day {
            TimeOfDay::Peak => self.peak_surge,
            TimeOfDay::Normal => self.off_peak_surge,
        }
    }
}

/// How a fare was put together.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub base: i64,
    /// Distance component before surge.
    pub distance: i64,
    pub surge_multiplier: f64,
    pub booking: i64,
    pub waiting_per_min: f64,
    pub fare_cap: Option<i64>,
    /// True when the fare cap replaced the computed total.
    pub capped: bool,
}

impl CostBreakdown {
    /// Surge as a percentage label ("50%"), or "None" when there is no surge.
    pub fn surge_label(&self) -> String {
        if self.surge_multiplier > 1.0 {
            let percent = ((self.surge_multiplier - 1.0) * 100.0).round() as i64;
            format!("{percent}%")
        } else {
            "None".to_string()
        }
    }
}

/// Fare estimate in whole currency units (rupees).
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    pub min: i64,
    pub max: i64,
    pub estimated: i64,
    pub breakdown: CostBreakdown,
    /// True for human-powered modes.
    pub free: bool,
}

impl CostEstimate {
    fn free() -> Self {
        Self {
            min: 0,
            max: 0,
            estimated: 0,
            breakdown: CostBreakdown {
                base: 0,
                distance: 0,
                surge_multiplier: 1.0,
                booking: 0,
                waiting_per_min: 0.0,
                fare_cap: None,
                capped: false,
            },
            free: true,
        }
    }

    /// Display string, e.g. "₹83 - ₹125" or "Free".
    pub fn display(&self) -> String {
        if self.free {
            "Free".to_string()
        } else {
            format!("₹{} - ₹{}", self.min, self.max)
        }
    }
}

/// Estimate the fare for travelling `distance_km` by `mode`.
///
/// Walking and cycling short-circuit to a free result.
pub fn estimate_cost(
    distance_km: f64,
    mode: TransportMode,
    time_of_day: TimeOfDay,
) -> CostEstimate {
    if mode.is_human_powered() {
        return CostEstimate::free();
    }

    let tariff = Tariff::for_mode(mode);
    let surge = tariff.surge(time_of_day);

    let mut total = tariff.base_fare + distance_km * tariff.per_km * surge + tariff.booking_fee;
    let mut capped = false;
    if let Some(cap) = tariff.fare_cap
        && total > cap
    {
        total = cap;
        capped = true;
    }

    CostEstimate {
        min: (total * (1.0 - FARE_SPREAD)).round() as i64,
        max: (total * (1.0 + FARE_SPREAD)).round() as i64,
        estimated: total.round() as i64,
        breakdown: CostBreakdown {
            base: tariff.base_fare.round() as i64,
            distance: (distance_km * tariff.per_km).round() as i64,
            surge_multiplier: surge,
            booking: tariff.booking_fee.round() as i64,
            waiting_per_min: tariff.waiting_per_min,
            fare_cap: tariff.fare_cap.map(|c| c.round() as i64),
            capped,
        },
        free: false,
    }
}
