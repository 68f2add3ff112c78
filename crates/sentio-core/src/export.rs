//! JSON export document written after an analysis run.
//!
//! The wire shape uses camelCase keys:
//!
//! ```json
//! {
//!   "timestamp": "2026-10-18T09:30:00Z",
//!   "totalComments": 2,
//!   "sentimentDistribution": { "positive": 1, "negative": 1, "neutral": 0 },
//!   "comments": [ { "text": "...", "sentiment": "positive", "confidence": 0.95,
//!                   "summary": "...", "keywords": ["..."] } ]
//! }
//! ```

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AnalyzedComment;
use crate::enums::Sentiment;

/// Integer count of comments per sentiment label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SentimentDistribution {
    /// Tally labels across a result set.
    #[must_use]
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Sentiment>,
    {
        let mut dist = Self::default();
        for label in labels {
            match label {
                Sentiment::Positive => dist.positive += 1,
                Sentiment::Negative => dist.negative += 1,
                Sentiment::Neutral => dist.neutral += 1,
            }
        }
        dist
    }

    #[must_use]
    pub fn from_comments(comments: &[AnalyzedComment]) -> Self {
        Self::from_labels(comments.iter().map(|c| c.sentiment))
    }

    #[must_use]
    pub const fn count(&self, label: Sentiment) -> u32 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    /// Share of `label` in percent; `0.0` for an empty distribution.
    #[must_use]
    pub fn percent(&self, label: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(label)) / f64::from(total) * 100.0
    }

    /// [`Self::percent`] rendered with one decimal place, e.g. `"33.3"`.
    #[must_use]
    pub fn percent_label(&self, label: Sentiment) -> String {
        format!("{:.1}", self.percent(label))
    }
}

/// Per-comment record inside an [`ExportDocument`]. The comment id is not exported.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExportedComment {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub summary: String,
    pub keywords: Vec<String>,
}

impl From<&AnalyzedComment> for ExportedComment {
    fn from(comment: &AnalyzedComment) -> Self {
        Self {
            text: comment.text.clone(),
            sentiment: comment.sentiment,
            confidence: comment.confidence,
            summary: comment.summary.clone(),
            keywords: comment.keywords.clone(),
        }
    }
}

/// The exported analysis artifact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// ISO 8601 timestamp of the export.
    pub timestamp: DateTime<Utc>,
    pub total_comments: u32,
    pub sentiment_distribution: SentimentDistribution,
    pub comments: Vec<ExportedComment>,
}

impl ExportDocument {
    /// Build the export for a result set at the given instant.
    #[must_use]
    pub fn from_comments(comments: &[AnalyzedComment], timestamp: DateTime<Utc>) -> Self {
        let sentiment_distribution = SentimentDistribution::from_comments(comments);
        Self {
            timestamp,
            total_comments: sentiment_distribution.total(),
            sentiment_distribution,
            comments: comments.iter().map(ExportedComment::from).collect(),
        }
    }

    /// Recount the distribution from the exported comments.
    #[must_use]
    pub fn recount(&self) -> SentimentDistribution {
        SentimentDistribution::from_labels(self.comments.iter().map(|c| c.sentiment))
    }

    /// Whether the stored totals agree with the exported comments.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let recount = self.recount();
        recount == self.sentiment_distribution
            && usize::try_from(self.total_comments).is_ok_and(|n| n == self.comments.len())
    }
}
