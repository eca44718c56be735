//! Risk percentage extraction from free-form narratives.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3})%").expect("percentage pattern is valid"));

/// Digits of the first `<1-3 digits>%` in reading order.
///
/// No range check is applied: `"150%"` yields `"150"`.
pub fn extract_percentage(text: &str) -> Option<&str> {
    PERCENTAGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Risk percentage reported by a narrative, or `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskScore {
    Percent(u16),
    Unknown,
}

impl RiskScore {
    pub fn from_text(text: &str) -> Self {
        extract_percentage(text)
            .and_then(|digits| digits.parse().ok())
            .map(Self::Percent)
            .unwrap_or(Self::Unknown)
    }

    pub fn percent(self) -> Option<u16> {
        match self {
            Self::Percent(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(value) => write!(f, "{}", value),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Serialized as the number, or the string `"Unknown"`
impl Serialize for RiskScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Percent(value) => serializer.serialize_u16(*value),
            Self::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_narrative() {
        assert_eq!(
            extract_percentage("**Fraud Risk:** 42%\nAnalysis: ..."),
            Some("42")
        );
    }

    #[test]
    fn test_no_percentage() {
        assert_eq!(extract_percentage("Risk unknown, no score given"), None);
        assert_eq!(RiskScore::from_text("Risk unknown, no score given"), RiskScore::Unknown);
        assert_eq!(RiskScore::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_percentage("risk 7%, then later 99%"), Some("7"));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(extract_percentage("Risk: 150%"), Some("150"));
        assert_eq!(RiskScore::from_text("Risk: 150%"), RiskScore::Percent(150));
    }

    #[test]
    fn test_at_most_three_digits() {
        // Leftmost match that fits the pattern
        assert_eq!(extract_percentage("1234%"), Some("234"));
        assert_eq!(extract_percentage("100%"), Some("100"));
    }

    #[test]
    fn test_percent_sign_must_follow_digits() {
        assert_eq!(extract_percentage("42 %"), None);
        assert_eq!(extract_percentage("Fraud Risk: Unknown%"), None);
        assert_eq!(extract_percentage("%42"), None);
    }

    #[test]
    fn test_score_display_and_serialize() {
        let score = RiskScore::from_text("**AML Risk:** 5%");
        assert_eq!(score, RiskScore::Percent(5));
        assert_eq!(score.percent(), Some(5));
        assert_eq!(score.to_string(), "5");
        assert_eq!(serde_json::to_value(score).unwrap(), serde_json::json!(5));
        assert_eq!(
            serde_json::to_value(RiskScore::Unknown).unwrap(),
            serde_json::json!("Unknown")
        );
    }
}
