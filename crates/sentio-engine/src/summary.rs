//! One-line summary of a comment.

use sentio_core::enums::Sentiment;

/// A sentence fragment must be longer than this (trimmed) to be used.
const MIN_SENTENCE_CHARS: usize = 10;

/// Fragments longer than this are cut and marked with an ellipsis.
const MAX_FRAGMENT_CHARS: usize = 80;

/// Length of the raw-text fallback when no sentence qualifies.
const FALLBACK_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Label placed before the chosen sentence.
#[must_use]
pub const fn summary_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Stakeholder expresses support:",
        Sentiment::Negative => "Stakeholder raises concerns:",
        Sentiment::Neutral => "Stakeholder suggests:",
    }
}

/// Summarize `text` as the first substantial sentence behind a sentiment label.
///
/// Falls back to the first 100 characters of the raw text plus `...` (without
/// a label) when no sentence is longer than 10 characters.
#[must_use]
pub fn summarize(text: &str, sentiment: Sentiment) -> String {
    let first = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .find(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS);

    let Some(sentence) = first else {
        return format!("{}{ELLIPSIS}", take_chars(text, FALLBACK_CHARS));
    };

    let truncated = if sentence.chars().count() > MAX_FRAGMENT_CHARS {
        ELLIPSIS
    } else {
        ""
    };
    format!(
        "{} {}{truncated}",
        summary_label(sentiment),
        take_chars(sentence, MAX_FRAGMENT_CHARS)
    )
}

fn take_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or(text, |(idx, _)| &text[..idx])
}
