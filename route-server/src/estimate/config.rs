//! Estimator configuration.

use serde::Deserialize;

use crate::domain::TimeOfDay;

/// An inclusive range of wall-clock hours treated as peak traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakWindow {
    /// First peak hour (0-23).
    pub start_hour: u32,
    /// Last peak hour (0-23), inclusive.
    pub end_hour: u32,
}

impl PeakWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether `hour` falls inside this window.
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Configuration parameters for route estimation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatorConfig {
    /// Hours treated as peak when the caller does not specify a time of day.
    pub peak_windows: Vec<PeakWindow>,

    /// How many recommended modes to surface alongside a route.
    pub max_recommendations: usize,
}

impl EstimatorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(peak_windows: Vec<PeakWindow>, max_recommendations: usize) -> Self {
        Self {
            peak_windows,
            max_recommendations,
        }
    }

    /// Time-of-day bucket for a wall-clock hour.
    pub fn time_of_day_at(&self, hour: u32) -> TimeOfDay {
        if self.peak_windows.iter().any(|w| w.contains(hour)) {
            TimeOfDay::Peak
        } else {
            TimeOfDay::Normal
        }
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            // Morning and evening rush
            peak_windows: vec![PeakWindow::new(8, 10), PeakWindow::new(18, 20)],
            max_recommendations: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EstimatorConfig::default();
        assert_eq!(config.max_recommendations, 3);
        assert_eq!(config.peak_windows.len(), 2);
    }

    #[test]
    fn default_peak_hours() {
        let config = EstimatorConfig::default();
        let peak: Vec<u32> = (0..24)
            .filter(|h| config.time_of_day_at(*h).is_peak())
            .collect();
        assert_eq!(peak, vec![8, 9, 10, 18, 19, 20]);
    }

    #[test]
    fn custom_config() {
        let config = EstimatorConfig::new(vec![PeakWindow::new(7, 7)], 2);
        assert_eq!(config.time_of_day_at(7), TimeOfDay::Peak);
        assert_eq!(config.time_of_day_at(8), TimeOfDay::Normal);
        assert_eq!(config.max_recommendations, 2);
    }

    #[test]
    fn no_windows_means_never_peak() {
        let config = EstimatorConfig::new(Vec::new(), 3);
        assert!((0..24).all(|h| !config.time_of_day_at(h).is_peak()));
    }

    #[test]
    fn deserialize_partial() {
        let config: EstimatorConfig =
            serde_json::from_str(r#"{"maxRecommendations": 5}"#).unwrap();
        assert_eq!(config.max_recommendations, 5);
        assert_eq!(config.peak_windows, EstimatorConfig::default().peak_windows);

        let config: EstimatorConfig = serde_json::from_str(
            r#"{"peakWindows": [{"startHour": 17, "endHour": 19}]}"#,
        )
        .unwrap();
        assert_eq!(config.peak_windows, vec![PeakWindow::new(17, 19)]);
    }
}
