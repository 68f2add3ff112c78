//! Consultation-level aggregate over a result set.

use serde::Serialize;
use sentio_config::ReportConfig;
use sentio_core::enums::Sentiment;
use sentio_core::export::{ExportDocument, SentimentDistribution};

use crate::narrative::{executive_summary, recommendations};
use crate::themes::{key_concerns, positive_themes};
use crate::tone::OverallTone;
use crate::view::CommentView;

/// Percentage per label, rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentShares {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentShares {
    #[must_use]
    pub fn from_distribution(dist: &SentimentDistribution) -> Self {
        let share = |label| (dist.percent(label) * 10.0).round() / 10.0;
        Self {
            positive: share(Sentiment::Positive),
            negative: share(Sentiment::Negative),
            neutral: share(Sentiment::Neutral),
        }
    }
}

/// Everything a reviewer needs to read the consultation at a glance.
///
/// An empty result set yields a report with zero counts and no tone,
/// themes, recommendations, or narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationReport {
    pub total_comments: u32,
    pub distribution: SentimentDistribution,
    pub percentages: SentimentShares,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_tone: Option<OverallTone>,
    pub key_concerns: Vec<String>,
    pub positive_themes: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
}

impl ConsultationReport {
    #[must_use]
    pub fn build<C: CommentView>(comments: &[C], config: &ReportConfig) -> Self {
        let distribution = SentimentDistribution::from_labels(comments.iter().map(C::sentiment));
        let total_comments = distribution.total();
        let overall_tone =
            (total_comments > 0).then(|| OverallTone::from_distribution(&distribution));

        tracing::debug!(
            total = total_comments,
            positive = distribution.positive,
            negative = distribution.negative,
            neutral = distribution.neutral,
            "building consultation report"
        );

        Self {
            total_comments,
            distribution,
            percentages: SentimentShares::from_distribution(&distribution),
            overall_tone,
            key_concerns: key_concerns(comments, config.top_keywords),
            positive_themes: positive_themes(comments, config.top_keywords),
            recommendations: recommendations(&distribution),
            executive_summary: executive_summary(&distribution),
        }
    }

    /// Rebuild the report from a previously exported analysis.
    #[must_use]
    pub fn from_export(doc: &ExportDocument, config: &ReportConfig) -> Self {
        Self::build(&doc.comments, config)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_comments == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sentio_core::entities::AnalyzedComment;

    fn comment(sentiment: Sentiment, keywords: &[&str]) -> AnalyzedComment {
        AnalyzedComment {
            id: format!("cmt-{sentiment}-{}", keywords.join("")),
            text: keywords.join(" "),
            sentiment,
            confidence: 0.8,
            summary: String::new(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let comments: Vec<AnalyzedComment> = Vec::new();
        let report = ConsultationReport::build(&comments, &ReportConfig::default());
        assert!(report.is_empty());
        assert_eq!(report.overall_tone, None);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.executive_summary, None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("overall_tone").is_none());
    }

    #[test]
    fn report_bundles_every_aggregate() {
        let comments = vec![
            comment(Sentiment::Negative, &["burden", "cost"]),
            comment(Sentiment::Negative, &["cost"]),
            comment(Sentiment::Positive, &["clarity"]),
        ];
        let report = ConsultationReport::build(&comments, &ReportConfig::default());

        assert_eq!(report.total_comments, 3);
        assert_eq!(report.overall_tone, Some(OverallTone::GenerallyNegative));
        assert_eq!(report.key_concerns, vec!["cost", "burden"]);
        assert_eq!(report.positive_themes, vec!["clarity"]);
        assert_eq!(report.recommendations.len(), 3);
        assert!((report.percentages.negative - 66.7).abs() < 1e-9);
        assert!(report.executive_summary.is_some());
    }

    #[test]
    fn top_keywords_setting_limits_themes() {
        let comments = vec![comment(Sentiment::Positive, &["alpha", "bravo", "charlie"])];
        let config = ReportConfig {
            top_keywords: 1,
            ..ReportConfig::default()
        };
        let report = ConsultationReport::build(&comments, &config);
        assert_eq!(report.positive_themes, vec!["alpha"]);
    }
}
