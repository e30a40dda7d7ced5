//! Time-of-day bucket.

use std::fmt;

use super::DomainError;

/// Coarse traffic classification used instead of live traffic data.
///
/// Determines surge multipliers, speed degradation and waiting times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeOfDay {
    #[default]
    Normal,
    Peak,
}

impl TimeOfDay {
    /// Parse from the wire name ("normal" or "peak").
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(TimeOfDay::Normal),
            "peak" => Ok(TimeOfDay::Peak),
            _ => Err(DomainError::UnknownTimeOfDay(s.to_string())),
        }
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Normal => "normal",
            TimeOfDay::Peak => "peak",
        }
    }

    /// Returns true for peak hours.
    pub fn is_peak(&self) -> bool {
        matches!(self, TimeOfDay::Peak)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
