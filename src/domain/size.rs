//! T-shirt size labels used for estimation.

use crate::error::PointsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Estimation size label, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
}

impl SizeLabel {
    /// Number of declared labels
    pub const COUNT: usize = 5;

    /// All declared labels in ascending size order
    pub const ALL: [SizeLabel; Self::COUNT] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    /// Canonical label text (e.g. "XS")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }

    /// Position of the label in `ALL`
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Parse a label, exact and case-sensitive
    pub fn parse(s: &str) -> Result<Self, PointsError> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| PointsError::LabelNotFound(s.to_string()))
    }
}

impl FromStr for SizeLabel {
    type Err = PointsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SizeLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_labels() {
        for label in SizeLabel::ALL {
            assert_eq!(SizeLabel::parse(label.as_str()).unwrap(), label);
        }
        assert_eq!("XL".parse::<SizeLabel>().unwrap(), SizeLabel::ExtraLarge);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for input in ["XXL", "m", " M", "M ", "", "xs", "Medium"] {
            let err = SizeLabel::parse(input).unwrap_err();
            assert_eq!(err, PointsError::LabelNotFound(input.to_string()));
        }
    }

    #[test]
    fn test_ordinal_matches_declared_order() {
        for (i, label) in SizeLabel::ALL.iter().enumerate() {
            assert_eq!(label.ordinal(), i);
        }
        assert!(SizeLabel::ExtraSmall < SizeLabel::ExtraLarge);
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let json = serde_json::to_string(&SizeLabel::Medium).unwrap();
        assert_eq!(json, "\"M\"");
        let back: SizeLabel = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(back, SizeLabel::ExtraSmall);
    }
}
