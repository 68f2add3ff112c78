//! Recurring keywords within one sentiment group.

use sentio_core::enums::Sentiment;
use sentio_engine::rank_by_frequency;

use crate::view::CommentView;

/// Most frequent keywords across comments labelled `label`.
///
/// Ties keep first-seen order. Keywords are compared exactly as stored.
#[must_use]
pub fn top_keywords<C: CommentView>(comments: &[C], label: Sentiment, limit: usize) -> Vec<String> {
    let keywords = comments
        .iter()
        .filter(|c| c.sentiment() == label)
        .flat_map(|c| c.keywords().iter().map(String::as_str));

    rank_by_frequency(keywords)
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}

/// Recurring keywords in negative comments.
#[must_use]
pub fn key_concerns<C: CommentView>(comments: &[C], limit: usize) -> Vec<String> {
    top_keywords(comments, Sentiment::Negative, limit)
}

/// Recurring keywords in positive comments.
#[must_use]
pub fn positive_themes<C: CommentView>(comments: &[C], limit: usize) -> Vec<String> {
    top_keywords(comments, Sentiment::Positive, limit)
}
