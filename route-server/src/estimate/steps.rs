//! Turn-by-turn style instructions for presentation.
//!
//! These are templates, not navigation: there is no road network behind
//! them. Every list starts with a departure step and ends with an arrival
//! step.

use crate::domain::TransportMode;

/// Distance beyond which a "continue on the main road" step is added.
const MAIN_ROAD_THRESHOLD_KM: f64 = 5.0;

/// Walks longer than this suggest a rest stop.
const REST_STOP_THRESHOLD_KM: f64 = 2.0;

/// Generate ordered instructions for travelling from `from` to `to`.
///
/// `from` and `to` are display labels (place names or formatted
/// coordinates).
pub fn generate_steps(from: &str, to: &str, mode: TransportMode, distance_km: f64) -> Vec<String> {
    let mut steps = vec![format!("Start from {from}")];

    match mode {
        TransportMode::Walking => {
            steps.push(format!("Walk towards {to}"));
            if distance_km > REST_STOP_THRESHOLD_KM {
                steps.push("Take a short rest stop halfway if needed".to_string());
            }
        }
        TransportMode::Cycling => {
            steps.push("Check your brakes and lights before setting off".to_string());
            steps.push(format!("Cycle towards {to}, using cycle lanes where available"));
        }
        TransportMode::Auto => {
            steps.push("Book an auto-rickshaw in the app or hail one nearby".to_string());
            steps.push("Agree the fare or ask for the meter before boarding".to_string());
            steps.push(format!("Ride towards {to}"));
        }
        TransportMode::Bus => {
            steps.push("Walk to the nearest bus stop".to_string());
            steps.push(format!("Board a city bus heading towards {to}"));
            steps.push("Pay the conductor or tap your travel card".to_string());
            steps.push(format!("Get off at the stop closest to {to}"));
        }
        TransportMode::Car => {
            steps.push("Book a cab in the app".to_string());
            steps.push("Meet the driver at the pickup point".to_string());
            steps.push(format!("Ride towards {to}"));
        }
        TransportMode::Bike => {
            steps.push("Book a bike taxi in the app".to_string());
            steps.push("Wear the helmet provided by the rider".to_string());
            steps.push(format!("Ride towards {to}"));
        }
    }

    if distance_km > MAIN_ROAD_THRESHOLD_KM {
        steps.push(format!("Continue on the main road for about {distance_km:.1} km"));
    }

    steps.push(format!("Arrive at {to}"));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_and_ends_for_every_mode() {
        for mode in TransportMode::ALL {
            let steps = generate_steps("Jaydev Vihar", "Lingaraj Temple", mode, 3.0);
            assert_eq!(steps.first().unwrap(), "Start from Jaydev Vihar");
            assert_eq!(steps.last().unwrap(), "Arrive at Lingaraj Temple");
        }
    }

    #[test]
    fn short_walk() {
        let steps = generate_steps("A", "B", TransportMode::Walking, 1.0);
        assert_eq!(steps, vec!["Start from A", "Walk towards B", "Arrive at B"]);
    }

    #[test]
    fn long_walk_suggests_rest() {
        let steps = generate_steps("A", "B", TransportMode::Walking, 2.5);
        assert!(steps.iter().any(|s| s.contains("rest stop")));
        assert!(!steps.iter().any(|s| s.contains("main road")));
    }

    #[test]
    fn bus_steps() {
        let steps = generate_steps("A", "B", TransportMode::Bus, 4.0);
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[1], "Walk to the nearest bus stop");
        assert_eq!(steps[4], "Get off at the stop closest to B");
    }

    #[test]
    fn long_trip_adds_main_road_before_arrival() {
        let steps = generate_steps("A", "B", TransportMode::Auto, 6.6);
        let n = steps.len();
        assert_eq!(steps[n - 2], "Continue on the main road for about 6.6 km");
        assert_eq!(steps[n - 1], "Arrive at B");
    }

    #[test]
    fn exactly_threshold_has_no_main_road_step() {
        let steps = generate_steps("A", "B", TransportMode::Car, 5.0);
        assert!(!steps.iter().any(|s| s.contains("main road")));
    }
}
