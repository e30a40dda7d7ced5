//! Ranks transport modes for a trip.
//!
//! Each mode starts at 50, gains or loses points for how well the distance
//! suits it, then adjusts for peak hours (human-powered modes gain, since
//! they skip the traffic; motorised modes lose).

use crate::domain::{TimeOfDay, TransportMode};

const BASE_SCORE: i64 = 50;

/// Scores above this are recommended.
pub const RECOMMENDED_THRESHOLD: i64 = 60;

/// How well one mode suits a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeRecommendation {
    pub mode: TransportMode,
    pub score: i64,
    pub recommended: bool,
    pub reason: &'static str,
}

/// Distance-fit adjustment for a mode.
fn distance_fit(mode: TransportMode, distance_km: f64) -> i64 {
    let d = distance_km;
    match mode {
        TransportMode::Walking => {
            if d < 2.0 {
                30
            } else if d < 5.0 {
                10
            } else {
                -20
            }
        }
        TransportMode::Cycling => {
            if d < 5.0 {
                25
            } else if d < 10.0 {
                15
            } else {
                -15
            }
        }
        TransportMode::Auto => {
            if d < 3.0 {
                10
            } else if d < 15.0 {
                25
            } else {
                5
            }
        }
        TransportMode::Bus => {
            if d < 3.0 {
                -5
            } else if d < 20.0 {
                20
            } else {
                15
            }
        }
        TransportMode::Car => {
            if d < 5.0 {
                0
            } else if d < 20.0 {
                15
            } else {
                25
            }
        }
        TransportMode::Bike => {
            if d < 2.0 {
                5
            } else if d < 12.0 {
                25
            } else {
                10
            }
        }
    }
}

fn peak_adjustment(mode: TransportMode, time_of_day: TimeOfDay) -> i64 {
    match (time_of_day, mode.is_human_powered()) {
        (TimeOfDay::Normal, _) => 0,
        (TimeOfDay::Peak, true) => 15,
        (TimeOfDay::Peak, false) => -10,
    }
}

fn reason(score: i64) -> &'static str {
    if score > RECOMMENDED_THRESHOLD {
        "Highly suitable for this distance"
    } else if score > 40 {
        "Suitable option"
    } else {
        "Not ideal for this distance"
    }
}

/// Score one mode for a trip.
pub fn recommend_mode(
    mode: TransportMode,
    distance_km: f64,
    time_of_day: TimeOfDay,
) -> ModeRecommendation {
    let score = BASE_SCORE + distance_fit(mode, distance_km) + peak_adjustment(mode, time_of_day);
    ModeRecommendation {
        mode,
        score,
        recommended: score > RECOMMENDED_THRESHOLD,
        reason: reason(score),
    }
}

/// Score every mode and sort best-first.
///
/// Ties keep the order of [`TransportMode::ALL`].
pub fn rank_modes(distance_km: f64, time_of_day: TimeOfDay) -> Vec<ModeRecommendation> {
    let mut ranking: Vec<ModeRecommendation> = TransportMode::ALL
        .into_iter()
        .map(|mode| recommend_mode(mode, distance_km, time_of_day))
        .collect();

    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

/// The first `limit` recommended modes of a ranking.
pub fn top_recommendations(
    ranking: &[ModeRecommendation],
    limit: usize,
) -> Vec<ModeRecommendation> {
    ranking
        .iter()
        .filter(|r| r.recommended)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes(ranking: &[ModeRecommendation]) -> Vec<TransportMode> {
        ranking.iter().map(|r| r.mode).collect()
    }

    #[test]
    fn mid_distance_off_peak() {
        let ranking = rank_modes(6.6, TimeOfDay::Normal);
        assert_eq!(
            modes(&ranking),
            vec![
                TransportMode::Auto,
                TransportMode::Bike,
                TransportMode::Bus,
                TransportMode::Cycling,
                TransportMode::Car,
                TransportMode::Walking,
            ]
        );
        assert_eq!(ranking[0].score, 75);
        assert_eq!(ranking[5].score, 30);
        assert!(!ranking[5].recommended);
        assert_eq!(ranking[5].reason, "Not ideal for this distance");

        let top = top_recommendations(&ranking, 3);
        assert_eq!(
            modes(&top),
            vec![TransportMode::Auto, TransportMode::Bike, TransportMode::Bus]
        );
    }

    #[test]
    fn peak_favours_cycling() {
        let ranking = rank_modes(6.6, TimeOfDay::Peak);
        assert_eq!(ranking[0].mode, TransportMode::Cycling);
        assert_eq!(ranking[0].score, 80);

        let bus = ranking
            .iter()
            .find(|r| r.mode == TransportMode::Bus)
            .unwrap();
        assert_eq!(bus.score, 60);
        assert!(!bus.recommended);
        assert_eq!(bus.reason, "Suitable option");
    }

    #[test]
    fn short_trip_recommends_few_modes() {
        let ranking = rank_modes(1.0, TimeOfDay::Normal);
        assert_eq!(ranking[0].mode, TransportMode::Walking);
        assert_eq!(ranking[0].reason, "Highly suitable for this distance");

        let top = top_recommendations(&ranking, 3);
        assert_eq!(
            modes(&top),
            vec![TransportMode::Walking, TransportMode::Cycling]
        );
    }

    #[test]
    fn long_trip_prefers_car() {
        let ranking = rank_modes(30.0, TimeOfDay::Normal);
        assert_eq!(ranking[0].mode, TransportMode::Car);
        assert_eq!(ranking[0].score, 75);
    }

    #[test]
    fn ranking_is_deterministic() {
        assert_eq!(
            rank_modes(7.3, TimeOfDay::Normal),
            rank_modes(7.3, TimeOfDay::Normal)
        );
    }

    #[test]
    fn covers_every_mode_once() {
        let mut seen = modes(&rank_modes(4.0, TimeOfDay::Peak));
        seen.sort();
        assert_eq!(seen, TransportMode::ALL.to_vec());
    }
}
