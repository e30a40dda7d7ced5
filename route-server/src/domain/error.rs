//! Domain error types.
//!
//! These errors represent validation failures on values entering the
//! estimation engine. They are distinct from HTTP/IO errors.

/// Domain-level errors for input validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude is out of range or not finite
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(&'static str),

    /// Coordinate array did not have exactly two elements
    #[error("coordinates must have exactly 2 elements, got {0}")]
    CoordinateArity(usize),

    /// Transport mode is not one of the supported modes
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),

    /// Time-of-day bucket is neither "normal" nor "peak"
    #[error("unknown time of day: {0}")]
    UnknownTimeOfDay(String),

    /// Route preference is not recognised
    #[error("unknown route preference: {0}")]
    UnknownPreference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidCoordinate("latitude must be within [-90, 90]");
        assert_eq!(
            err.to_string(),
            "invalid coordinate: latitude must be within [-90, 90]"
        );

        let err = DomainError::CoordinateArity(3);
        assert_eq!(
            err.to_string(),
            "coordinates must have exactly 2 elements, got 3"
        );

        let err = DomainError::UnknownMode("rocket".into());
        assert_eq!(err.to_string(), "unknown transport mode: rocket");

        let err = DomainError::UnknownTimeOfDay("dusk".into());
        assert_eq!(err.to_string(), "unknown time of day: dusk");

        let err = DomainError::UnknownPreference("scenic".into());
        assert_eq!(err.to_string(), "unknown route preference: scenic");
    }
}
