//! Risk tiers used to group free-form risk labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation tier for a risk label.
///
/// Engines send free-form labels; every label lands in exactly one tier and
/// anything unrecognised is `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// "high"
    High,
    /// "medium"
    Medium,
    /// "low" and every unrecognised label
    #[default]
    Low,
}

impl RiskTier {
    /// Classify a label case-insensitively, ignoring surrounding whitespace.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("high") {
            Self::High
        } else if label.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Lowercase tier name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
