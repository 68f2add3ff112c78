use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CommentSource, Sentiment};

/// User-supplied or file-derived text awaiting analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RawComment {
    pub id: String,
    pub text: String,
    pub source: CommentSource,
}

impl RawComment {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, source: CommentSource) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source,
        }
    }
}

/// A raw comment annotated by the analysis engine.
///
/// Never mutated after creation; a rerun produces a new set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyzedComment {
    /// Same identity as the source [`RawComment`].
    pub id: String,
    pub text: String,
    pub sentiment: Sentiment,
    /// Always within `[0, 0.95]`.
    pub confidence: f64,
    pub summary: String,
    /// At most five entries, unique, no stop words.
    pub keywords: Vec<String>,
}
