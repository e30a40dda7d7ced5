//! Travel time estimation.
//!
//! Time is distance over an average speed for the mode, plus a fixed
//! waiting allowance (finding a ride, waiting at the stop). Motorised
//! modes slow down and wait longer in peak hours.

use crate::domain::{TimeOfDay, TransportMode};

/// Average speed in km/h.
pub fn average_speed_kmh(mode: TransportMode, time_of_day: TimeOfDay) -> f64 {
    // (normal, peak)
    let (normal, peak) = match mode {
        TransportMode::Walking => (4.5, 4.5),
        TransportMode::Cycling => (12.0, 12.0),
        TransportMode::Auto => (25.0, 18.0),
        TransportMode::Bus => (22.0, 15.0),
        TransportMode::Car => (35.0, 20.0),
        TransportMode::Bike => (40.0, 25.0),
    };
    if time_of_day.is_peak() { peak } else { normal }
}

/// Fixed waiting allowance in minutes.
pub fn waiting_minutes(mode: TransportMode, time_of_day: TimeOfDay) -> i64 {
    let (normal, peak) = match mode {
        TransportMode::Walking | TransportMode::Cycling => (0, 0),
        TransportMode::Auto => (5, 8),
        TransportMode::Bus => (10, 15),
        TransportMode::Car => (7, 12),
        TransportMode::Bike => (4, 6),
    };
    if time_of_day.is_peak() { peak } else { normal }
}

/// Estimated journey time in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEstimate {
    pub travel_minutes: i64,
    pub waiting_minutes: i64,
    pub total_minutes: i64,
}

impl TimeEstimate {
    /// Total time formatted as "N mins" below an hour, "Hh Mm" otherwise.
    pub fn display(&self) -> String {
        format_minutes(self.total_minutes)
    }
}

/// Format a minute count as "N mins" or "Hh Mm".
pub fn format_minutes(minutes: i64) -> String {
    if minutes < 60 {
        format!("{minutes} mins")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Estimate the time to travel `distance_km` by `mode`.
pub fn estimate_time(
    distance_km: f64,
    mode: TransportMode,
    time_of_day: TimeOfDay,
) -> TimeEstimate {
    let speed = average_speed_kmh(mode, time_of_day);
    let travel_minutes = (distance_km / speed * 60.0).round() as i64;
    let waiting_minutes = waiting_minutes(mode, time_of_day);

    TimeEstimate {
        travel_minutes,
        waiting_minutes,
        total_minutes: travel_minutes + waiting_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_normal() {
        let t = estimate_time(6.6, TransportMode::Auto, TimeOfDay::Normal);
        // 6.6 / 25 * 60 = 15.84
        assert_eq!(t.travel_minutes, 16);
        assert_eq!(t.waiting_minutes, 5);
        assert_eq!(t.total_minutes, 21);
        assert_eq!(t.display(), "21 mins");
    }

    #[test]
    fn peak_is_slower_for_motorised_modes() {
        for mode in TransportMode::ALL.into_iter().filter(|m| m.is_motorized()) {
            let normal = estimate_time(10.0, mode, TimeOfDay::Normal);
            let peak = estimate_time(10.0, mode, TimeOfDay::Peak);
            assert!(peak.travel_minutes > normal.travel_minutes, "{mode}");
            assert!(peak.waiting_minutes > normal.waiting_minutes, "{mode}");
        }
    }

    #[test]
    fn human_powered_modes_ignore_peak() {
        for mode in [TransportMode::Walking, TransportMode::Cycling] {
            assert_eq!(
                estimate_time(3.0, mode, TimeOfDay::Normal),
                estimate_time(3.0, mode, TimeOfDay::Peak)
            );
        }
    }

    #[test]
    fn walking() {
        let t = estimate_time(4.5, TransportMode::Walking, TimeOfDay::Normal);
        assert_eq!(t.travel_minutes, 60);
        assert_eq!(t.waiting_minutes, 0);
        assert_eq!(t.display(), "1h 0m");
    }

    #[test]
    fn bus_peak() {
        let t = estimate_time(30.0, TransportMode::Bus, TimeOfDay::Peak);
        assert_eq!(t.travel_minutes, 120);
        assert_eq!(t.total_minutes, 135);
        assert_eq!(t.display(), "2h 15m");
    }

    #[test]
    fn zero_distance_is_only_waiting() {
        let t = estimate_time(0.0, TransportMode::Car, TimeOfDay::Peak);
        assert_eq!(t.travel_minutes, 0);
        assert_eq!(t.total_minutes, 12);
    }

    #[test]
    fn format_minutes_boundaries() {
        assert_eq!(format_minutes(0), "0 mins");
        assert_eq!(format_minutes(59), "59 mins");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(61), "1h 1m");
        assert_eq!(format_minutes(185), "3h 5m");
    }
}
