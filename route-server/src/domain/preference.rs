//! Route preference as chosen by the user.

use std::fmt;

use super::DomainError;

/// What the user asked to optimise for.
///
/// The estimator does not change its formulas based on this value; it
/// is echoed back so the frontend can label the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoutePreference {
    #[default]
    Fastest,
    Shortest,
    Cheapest,
    Balanced,
}

impl RoutePreference {
    /// Parse from the wire name.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" => Ok(RoutePreference::Fastest),
            "shortest" => Ok(RoutePreference::Shortest),
            "cheapest" => Ok(RoutePreference::Cheapest),
            "balanced" => Ok(RoutePreference::Balanced),
            _ => Err(DomainError::UnknownPreference(s.to_string())),
        }
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePreference::Fastest => "fastest",
            RoutePreference::Shortest => "shortest",
            RoutePreference::Cheapest => "cheapest",
            RoutePreference::Balanced => "balanced",
        }
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional user preferences that earn quality-score bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TravelPreferences {
    /// Prefers low-emission modes.
    pub eco: bool,
    /// Prefers cheap modes.
    pub budget: bool,
    /// Prefers comfortable modes.
    pub comfort: bool,
}
