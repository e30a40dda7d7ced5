//! Transport mode type.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// A supported way of travelling between two points.
///
/// The set is closed: every table in the estimation engine is an
/// exhaustive `match` over these variants, so an unrecognised mode can
/// only ever be a parse error at the boundary.
///
/// # Examples
///
/// ```
/// use route_server::domain::TransportMode;
///
/// let auto = TransportMode::parse("auto").unwrap();
/// assert_eq!(auto, TransportMode::Auto);
/// assert_eq!(auto.as_str(), "auto");
///
/// assert!(TransportMode::parse("rocket").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Walking,
    Cycling,
    /// Auto-rickshaw
    Auto,
    Bus,
    /// App-booked cab
    Car,
    /// App-booked motorbike taxi
    Bike,
}

impl TransportMode {
    /// All modes, in the order they are presented to users.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Walking,
        TransportMode::Cycling,
        TransportMode::Auto,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::Bike,
    ];

    /// Parse a mode from its lowercase wire name.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "walking" => Ok(TransportMode::Walking),
            "cycling" => Ok(TransportMode::Cycling),
            "auto" => Ok(TransportMode::Auto),
            "bus" => Ok(TransportMode::Bus),
            "car" => Ok(TransportMode::Car),
            "bike" => Ok(TransportMode::Bike),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }

    /// Parse a mode after trimming whitespace and lowercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, DomainError> {
        Self::parse(&s.trim().to_ascii_lowercase())
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Auto => "auto",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
        }
    }

    /// Human-readable name for instructions and UI labels.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Walking => "Walking",
            TransportMode::Cycling => "Cycling",
            TransportMode::Auto => "Auto-rickshaw",
            TransportMode::Bus => "Bus",
            TransportMode::Car => "Car",
            TransportMode::Bike => "Bike taxi",
        }
    }

    /// Whether the mode is human-powered (no fare, no emissions).
    pub fn is_human_powered(&self) -> bool {
        matches!(self, TransportMode::Walking | TransportMode::Cycling)
    }

    /// Whether the mode is motorised and therefore affected by traffic.
    pub fn is_motorized(&self) -> bool {
        !self.is_human_powered()
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_modes() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::parse(mode.as_str()), Ok(mode));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            TransportMode::parse("train"),
            Err(DomainError::UnknownMode("train".into()))
        );
        assert!(TransportMode::parse("").is_err());
        assert!(TransportMode::parse("Auto").is_err());
    }

    #[test]
    fn parse_normalized_accepts_case_and_whitespace() {
        assert_eq!(
            TransportMode::parse_normalized("  Auto "),
            Ok(TransportMode::Auto)
        );
        assert_eq!(
            TransportMode::parse_normalized("BUS"),
            Ok(TransportMode::Bus)
        );
    }

    #[test]
    fn from_str() {
        let mode: TransportMode = "cycling".parse().unwrap();
        assert_eq!(mode, TransportMode::Cycling);
    }

    #[test]
    fn human_powered_modes() {
        assert!(TransportMode::Walking.is_human_powered());
        assert!(TransportMode::Cycling.is_human_powered());
        assert!(TransportMode::Auto.is_motorized());
        assert!(TransportMode::Bus.is_motorized());
        assert!(TransportMode::Car.is_motorized());
        assert!(TransportMode::Bike.is_motorized());
    }

    #[test]
    fn display() {
        assert_eq!(TransportMode::Bike.to_string(), "bike");
        assert_eq!(TransportMode::Bike.label(), "Bike taxi");
    }
}
