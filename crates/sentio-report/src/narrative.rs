//! Recommendations and the executive summary paragraph.

use sentio_core::enums::Sentiment;
use sentio_core::export::SentimentDistribution;

use crate::tone::OverallTone;

pub const ADDRESS_CONCERNS: &str = "Address key concerns raised by stakeholders, particularly those mentioned frequently in negative feedback.";
pub const BUILD_ON_SUPPORT: &str =
    "Build upon aspects that received positive feedback to strengthen the draft legislation.";
pub const ENGAGE_NEUTRAL: &str =
    "Engage with stakeholders providing neutral feedback to better understand their positions.";
pub const FOLLOW_UP: &str = "Consider conducting follow-up consultations on contentious issues identified through sentiment analysis.";

/// Neutral share above which neutral respondents warrant follow-up.
const NEUTRAL_ENGAGEMENT_SHARE: f64 = 0.4;

/// Suggested next steps for the drafting team, in a fixed order.
///
/// Empty for an empty consultation; otherwise always ends with [`FOLLOW_UP`].
#[must_use]
pub fn recommendations(dist: &SentimentDistribution) -> Vec<String> {
    let total = dist.total();
    if total == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(4);
    if dist.negative > dist.positive {
        out.push(ADDRESS_CONCERNS);
    }
    if dist.positive > 0 {
        out.push(BUILD_ON_SUPPORT);
    }
    if f64::from(dist.neutral) > f64::from(total) * NEUTRAL_ENGAGEMENT_SHARE {
        out.push(ENGAGE_NEUTRAL);
    }
    out.push(FOLLOW_UP);
    out.into_iter().map(str::to_string).collect()
}

/// One-paragraph narrative of the consultation, or `None` when there is
/// nothing to summarize.
#[must_use]
pub fn executive_summary(dist: &SentimentDistribution) -> Option<String> {
    let total = dist.total();
    if total == 0 {
        return None;
    }

    let tone = OverallTone::from_distribution(dist);
    let mut text = format!(
        "The eConsultation received {total} stakeholder responses with a {tone} reception."
    );

    for label in Sentiment::ALL {
        if dist.count(label) == 0 {
            continue;
        }
        let pct = dist.percent_label(label);
        text.push_str(&match label {
            Sentiment::Positive => format!(
                " {pct}% of responses were positive, highlighting support for key aspects of the draft legislation."
            ),
            Sentiment::Negative => format!(
                " {pct}% expressed concerns that should be carefully considered for potential amendments."
            ),
            Sentiment::Neutral => format!(
                " {pct}% provided neutral feedback with constructive suggestions."
            ),
        });
    }

    text.push_str(
        " This analysis provides a foundation for informed decision-making in the legislative amendment process.",
    );
    Some(text)
}
