//! Qualitative rating shared by the quality and eco scores.

use std::fmt;

/// Four-level qualitative rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Rating {
    /// Rating for a 0-100 route quality score.
    ///
    /// ≥90 Excellent, ≥75 Good, ≥60 Average, otherwise Poor.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Rating::Excellent,
            75..=89 => Rating::Good,
            60..=74 => Rating::Average,
            _ => Rating::Poor,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(90), Rating::Excellent);
        assert_eq!(Rating::from_score(89), Rating::Good);
        assert_eq!(Rating::from_score(75), Rating::Good);
        assert_eq!(Rating::from_score(74), Rating::Average);
        assert_eq!(Rating::from_score(60), Rating::Average);
        assert_eq!(Rating::from_score(59), Rating::Poor);
        assert_eq!(Rating::from_score(0), Rating::Poor);
    }

    #[test]
    fn display() {
        assert_eq!(Rating::Good.to_string(), "Good");
    }
}
