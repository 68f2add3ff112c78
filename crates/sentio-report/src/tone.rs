//! Overall reception of a consultation.

use std::fmt;

use serde::Serialize;
use sentio_core::export::SentimentDistribution;

/// Which way the whole consultation leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallTone {
    #[serde(rename = "generally positive")]
    GenerallyPositive,
    #[serde(rename = "generally negative")]
    GenerallyNegative,
    #[serde(rename = "balanced")]
    Balanced,
}

impl OverallTone {
    /// A label wins only when it strictly exceeds both other counts.
    #[must_use]
    pub const fn from_distribution(dist: &SentimentDistribution) -> Self {
        if dist.positive > dist.negative && dist.positive > dist.neutral {
            Self::GenerallyPositive
        } else if dist.negative > dist.positive && dist.negative > dist.neutral {
            Self::GenerallyNegative
        } else {
            Self::Balanced
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenerallyPositive => "generally positive",
            Self::GenerallyNegative => "generally negative",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for OverallTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
