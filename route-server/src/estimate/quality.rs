//! Route quality scoring.
//!
//! A synthetic 0-100 score: start from 100, apply additive adjustments for
//! distance, time of day, mode efficiency and preference fit, then clamp.
//! Every adjustment that fires records a human-readable factor.

use crate::domain::{Rating, TimeOfDay, TransportMode, TravelPreferences};

const BASE_SCORE: i64 = 100;

/// Route quality with the reasons behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityScore {
    /// Always within 0..=100.
    pub score: u8,
    pub rating: Rating,
    /// Adjustments that contributed, in the order they were applied.
    pub factors: Vec<String>,
}

/// Accumulates adjustments and their explanations.
struct Scorecard {
    score: i64,
    factors: Vec<String>,
}

impl Scorecard {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            factors: Vec::new(),
        }
    }

    fn adjust(&mut self, delta: i64, factor: &str) {
        self.score += delta;
        self.factors.push(factor.to_string());
    }

    fn finish(self) -> QualityScore {
        let score = self.score.clamp(0, 100) as u8;
        QualityScore {
            score,
            rating: Rating::from_score(score),
            factors: self.factors,
        }
    }
}

/// Mode-efficiency adjustment for a distance, if any.
fn mode_efficiency(mode: TransportMode, distance_km: f64) -> Option<(i64, &'static str)> {
    match mode {
        TransportMode::Walking if distance_km < 3.0 => {
            Some((20, "Walking is ideal for short trips"))
        }
        TransportMode::Walking => Some((-10, "Long walk - consider other transport")),
        TransportMode::Cycling if distance_km < 8.0 => Some((15, "Comfortable cycling distance")),
        TransportMode::Cycling => Some((-5, "Long cycling distance")),
        TransportMode::Auto if distance_km < 12.0 => {
            Some((10, "Auto-rickshaw is efficient for this distance"))
        }
        TransportMode::Auto => Some((5, "Auto-rickshaw works but a cab may be better")),
        TransportMode::Bus => Some((5, "Public transport - economical choice")),
        TransportMode::Car if distance_km > 5.0 => {
            Some((15, "Car is comfortable for longer trips"))
        }
        TransportMode::Car => None,
        TransportMode::Bike if distance_km < 15.0 => {
            Some((12, "Bike taxi beats traffic on this distance"))
        }
        TransportMode::Bike => Some((8, "Bike taxi is quick but tiring over long trips")),
    }
}

/// Score a route.
pub fn score_route(
    distance_km: f64,
    mode: TransportMode,
    time_of_day: TimeOfDay,
    preferences: Option<&TravelPreferences>,
) -> QualityScore {
    let mut card = Scorecard::new();

    if distance_km > 15.0 {
        card.adjust(-15, "Long distance journey");
    } else if distance_km < 2.0 {
        card.adjust(10, "Short convenient distance");
    }

    match time_of_day {
        TimeOfDay::Peak => card.adjust(-20, "Peak hours - expect delays"),
        TimeOfDay::Normal => card.adjust(10, "Off-peak hours - smooth journey"),
    }

    if let Some((delta, factor)) = mode_efficiency(mode, distance_km) {
        card.adjust(delta, factor);
    }

    if let Some(prefs) = preferences {
        if prefs.eco && mode.is_human_powered() {
            card.adjust(15, "Eco-friendly choice");
        }
        if prefs.budget && (mode.is_human_powered() || mode == TransportMode::Bus) {
            card.adjust(10, "Budget-friendly choice");
        }
        if prefs.comfort && matches!(mode, TransportMode::Car | TransportMode::Auto) {
            card.adjust(8, "Comfortable ride");
        }
    }

    card.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_peak_auto_is_excellent() {
        let q = score_route(6.6, TransportMode::Auto, TimeOfDay::Normal, None);
        // 100 + 10 + 10, clamped
        assert_eq!(q.score, 100);
        assert_eq!(q.rating, Rating::Excellent);
        assert_eq!(
            q.factors,
            vec![
                "Off-peak hours - smooth journey".to_string(),
                "Auto-rickshaw is efficient for this distance".to_string(),
            ]
        );
    }

    #[test]
    fn long_peak_walk_is_poor() {
        let q = score_route(16.0, TransportMode::Walking, TimeOfDay::Peak, None);
        // 100 - 15 - 20 - 10
        assert_eq!(q.score, 55);
        assert_eq!(q.rating, Rating::Poor);
        assert_eq!(q.factors.len(), 3);
        assert_eq!(q.factors[0], "Long distance journey");
        assert_eq!(q.factors[1], "Peak hours - expect delays");
    }

    #[test]
    fn mid_distance_peak_walk_is_average() {
        let q = score_route(10.0, TransportMode::Walking, TimeOfDay::Peak, None);
        assert_eq!(q.score, 70);
        assert_eq!(q.rating, Rating::Average);
    }

    #[test]
    fn cycling_long_peak_is_good() {
        let q = score_route(10.0, TransportMode::Cycling, TimeOfDay::Peak, None);
        // 100 - 20 - 5
        assert_eq!(q.score, 75);
        assert_eq!(q.rating, Rating::Good);
    }

    #[test]
    fn short_car_trip_has_no_mode_factor() {
        let q = score_route(3.0, TransportMode::Car, TimeOfDay::Peak, None);
        assert_eq!(q.score, 80);
        assert_eq!(q.factors, vec!["Peak hours - expect delays".to_string()]);
    }

    #[test]
    fn short_distance_bonus() {
        let q = score_route(1.5, TransportMode::Bus, TimeOfDay::Peak, None);
        // 100 + 10 - 20 + 5
        assert_eq!(q.score, 95);
        assert_eq!(q.factors[0], "Short convenient distance");
    }

    #[test]
    fn preference_bonuses() {
        let prefs = TravelPreferences {
            eco: true,
            budget: true,
            comfort: true,
        };

        let q = score_route(16.0, TransportMode::Walking, TimeOfDay::Peak, Some(&prefs));
        // 55 + 15 eco + 10 budget
        assert_eq!(q.score, 80);
        assert!(q.factors.contains(&"Eco-friendly choice".to_string()));
        assert!(q.factors.contains(&"Budget-friendly choice".to_string()));
        assert!(!q.factors.contains(&"Comfortable ride".to_string()));

        let q = score_route(20.0, TransportMode::Auto, TimeOfDay::Peak, Some(&prefs));
        // 100 - 15 - 20 + 5 + 8
        assert_eq!(q.score, 78);
        assert!(q.factors.contains(&"Comfortable ride".to_string()));
        assert!(!q.factors.contains(&"Eco-friendly choice".to_string()));
    }

    #[test]
    fn preferences_without_match_change_nothing() {
        let prefs = TravelPreferences {
            comfort: true,
            ..Default::default()
        };
        let with = score_route(10.0, TransportMode::Bus, TimeOfDay::Peak, Some(&prefs));
        let without = score_route(10.0, TransportMode::Bus, TimeOfDay::Peak, None);
        assert_eq!(with, without);
    }
}
