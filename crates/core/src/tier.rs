//! Presentation helpers layered over raw confidence values.

use crate::constants::{MODERATE_CONFIDENCE, STRONG_CONFIDENCE};
use serde::{Deserialize, Serialize};

/// Visual bucket for a confidence value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Strong,
    Moderate,
    Weak,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= STRONG_CONFIDENCE {
            Self::Strong
        } else if confidence >= MODERATE_CONFIDENCE {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-number percentage, e.g. `0.5` becomes `"50%"`.
///
/// Halves round away from zero, so `0.125` becomes `"13%"`.
pub fn format_percentage(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round())
}
