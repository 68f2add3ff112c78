//! # sentio-engine
//!
//! Simulated sentiment analysis for stakeholder comments.
//!
//! Each comment is classified by a plurality vote over three fixed cue lists,
//! summarized as its first substantial sentence, and reduced to its five most
//! frequent keywords. The whole batch is released after a configurable delay
//! that stands in for a remote inference call.
//!
//! ## Async usage
//!
//! ```no_run
//! # async fn demo(comments: Vec<sentio_core::entities::RawComment>) {
//! use sentio_config::EngineConfig;
//! use sentio_engine::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new(&EngineConfig::default());
//! let results = engine.analyze(&comments).await.expect("non-empty batch");
//! # }
//! ```

mod classify;
mod error;
mod jitter;
mod keywords;
mod lexicon;
mod summary;

pub use classify::{MAX_CONFIDENCE, classify, decide};
pub use error::EngineError;
pub use jitter::{FixedJitter, Jitter, OsJitter};
pub use keywords::{
    MAX_KEYWORDS, STOP_WORDS, extract_keywords, is_stop_word, rank_by_frequency, strip_punctuation,
};
pub use lexicon::{Lexicon, NEGATIVE_CUES, NEUTRAL_CUES, POSITIVE_CUES, Tally, tokenize};
pub use summary::{summarize, summary_label};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use sentio_config::{EngineConfig, NeutralConfidence};
use sentio_core::entities::{AnalyzedComment, RawComment};

/// Lexicon classifier behind a simulated inference delay.
///
/// Holds no mutable state: every call is a function of its input and the
/// jitter source.
#[derive(Clone)]
pub struct AnalysisEngine {
    lexicon: Lexicon,
    latency: Duration,
    jitter: Arc<dyn Jitter>,
}

impl std::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("lexicon", &self.lexicon)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl AnalysisEngine {
    /// Build an engine from configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let jitter: Arc<dyn Jitter> = match config.neutral_confidence {
            NeutralConfidence::Jittered => Arc::new(OsJitter),
            NeutralConfidence::Fixed => Arc::new(FixedJitter::MIDPOINT),
        };
        Self {
            lexicon: Lexicon::new(config.match_mode),
            latency: config.latency(),
            jitter,
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the neutral-confidence jitter source.
    #[must_use]
    pub fn with_jitter(mut self, jitter: impl Jitter + 'static) -> Self {
        self.jitter = Arc::new(jitter);
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Analyze a batch after the simulated latency.
    ///
    /// The result has the same length and ID order as `comments` and is
    /// delivered all at once.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyInput`] immediately for an empty batch and
    /// [`EngineError::DuplicateId`] when two comments share an ID.
    pub async fn analyze(
        &self,
        comments: &[RawComment],
    ) -> Result<Vec<AnalyzedComment>, EngineError> {
        validate_batch(comments)?;
        if !self.latency.is_zero() {
            tracing::debug!(latency_ms = self.latency.as_millis(), "simulating inference delay");
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.analyze_batch(comments))
    }

    /// Analyze a batch without the simulated latency.
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze`].
    pub fn analyze_now(
        &self,
        comments: &[RawComment],
    ) -> Result<Vec<AnalyzedComment>, EngineError> {
        validate_batch(comments)?;
        Ok(self.analyze_batch(comments))
    }

    /// Analyze a single comment.
    #[must_use]
    pub fn analyze_comment(&self, comment: &RawComment) -> AnalyzedComment {
        let tokens = tokenize(&comment.text);
        let tally = self.lexicon.tally(&tokens);
        let (sentiment, confidence) = classify(tally, tokens.len(), self.jitter.as_ref());

        tracing::trace!(
            id = %comment.id,
            positive = tally.positive,
            negative = tally.negative,
            neutral = tally.neutral,
            %sentiment,
            "classified comment"
        );

        AnalyzedComment {
            id: comment.id.clone(),
            text: comment.text.clone(),
            sentiment,
            confidence,
            summary: summarize(&comment.text, sentiment),
            keywords: extract_keywords(&comment.text),
        }
    }

    fn analyze_batch(&self, comments: &[RawComment]) -> Vec<AnalyzedComment> {
        let results: Vec<AnalyzedComment> =
            comments.iter().map(|c| self.analyze_comment(c)).collect();
        tracing::info!(comments = results.len(), "analysis batch complete");
        results
    }
}

fn validate_batch(comments: &[RawComment]) -> Result<(), EngineError> {
    if comments.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    let mut seen = HashSet::with_capacity(comments.len());
    for comment in comments {
        if !seen.insert(comment.id.as_str()) {
            return Err(EngineError::DuplicateId(comment.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentio_core::enums::{CommentSource, Sentiment};

    fn raw(id: &str, text: &str) -> RawComment {
        RawComment::new(id, text, CommentSource::Manual)
    }

    fn engine() -> AnalysisEngine {
        AnalysisEngine::default()
            .with_latency(Duration::ZERO)
            .with_jitter(FixedJitter::MIDPOINT)
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(engine().analyze_now(&[]), Err(EngineError::EmptyInput));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let batch = [raw("x", "good"), raw("x", "bad")];
        assert_eq!(
            engine().analyze_now(&batch),
            Err(EngineError::DuplicateId("x".into()))
        );
    }

    #[test]
    fn empty_text_is_tolerated() {
        let result = engine().analyze_comment(&raw("e", ""));
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.65).abs() < 1e-9);
        assert_eq!(result.summary, "...");
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn fixed_config_gives_midpoint_neutral_confidence() {
        let config = EngineConfig {
            latency_ms: 0,
            neutral_confidence: NeutralConfidence::Fixed,
            ..EngineConfig::default()
        };
        let result = AnalysisEngine::new(&config).analyze_comment(&raw("n", "Lorem ipsum"));
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.65).abs() < 1e-9);
    }

    #[tokio::test]
    async fn analyze_waits_for_latency() {
        let engine = engine().with_latency(Duration::from_millis(30));
        let started = std::time::Instant::now();
        let results = engine.analyze(&[raw("a", "good idea")]).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn empty_batch_fails_without_waiting() {
        let engine = engine().with_latency(Duration::from_secs(30));
        let started = std::time::Instant::now();
        assert_eq!(engine.analyze(&[]).await, Err(EngineError::EmptyInput));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
