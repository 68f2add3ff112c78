//! Sentiment labels and comment provenance.
//!
//! All enums use lowercase serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the wire format of the export document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Sentiment label assigned to a comment. Exactly one per comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels in display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommentSource
// ---------------------------------------------------------------------------

/// Where a raw comment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommentSource {
    /// Typed in directly by the user.
    Manual,
    /// One line of an uploaded text or CSV file.
    File,
}

impl CommentSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::File => "file",
        }
    }
}

impl fmt::Display for CommentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
