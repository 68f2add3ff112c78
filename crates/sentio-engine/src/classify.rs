//! Plurality vote over lexicon tallies.

use sentio_core::enums::Sentiment;

use crate::jitter::Jitter;
use crate::lexicon::Tally;

/// Upper bound for every confidence value.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Base confidence of a positive or negative decision.
const DECISIVE_BASE: f64 = 0.6;

/// Neutral confidence is `NEUTRAL_BASE + jitter * NEUTRAL_SPREAD`.
const NEUTRAL_BASE: f64 = 0.5;
const NEUTRAL_SPREAD: f64 = 0.3;

/// The strictly highest tally wins; any tie, including all zeros, is neutral.
#[must_use]
pub const fn decide(tally: Tally) -> Sentiment {
    if tally.positive > tally.negative && tally.positive > tally.neutral {
        Sentiment::Positive
    } else if tally.negative > tally.positive && tally.negative > tally.neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classify a tallied comment of `token_count` tokens and score the decision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify(tally: Tally, token_count: usize, jitter: &dyn Jitter) -> (Sentiment, f64) {
    let sentiment = decide(tally);
    let confidence = match sentiment {
        Sentiment::Positive | Sentiment::Negative => {
            let winning = if sentiment == Sentiment::Positive {
                tally.positive
            } else {
                tally.negative
            };
            // A decisive label implies at least one token.
            DECISIVE_BASE + winning as f64 / token_count.max(1) as f64
        }
        Sentiment::Neutral => NEUTRAL_BASE + jitter.sample() * NEUTRAL_SPREAD,
    };
    (sentiment, confidence.clamp(0.0, MAX_CONFIDENCE))
}
