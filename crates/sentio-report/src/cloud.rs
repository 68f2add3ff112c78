//! Word cloud model over analyzed comments.
//!
//! Frequencies combine every comment's keywords with the longer words of its
//! text. Presentation attributes are derived from rank alone, so the same
//! input always lays out the same cloud.

use serde::Serialize;
use sentio_engine::{rank_by_frequency, strip_punctuation};

use crate::view::CommentView;

/// Smallest and largest font sizes, in points.
const MIN_FONT_SIZE: f64 = 12.0;
const MAX_FONT_SIZE: f64 = 32.0;

/// Text words of this many characters or fewer are ignored.
const MAX_SHORT_WORD_CHARS: usize = 3;

/// Rotations span `-MAX_ROTATION..=MAX_ROTATION` degrees.
const MAX_ROTATION: i32 = 10;

/// Filler words dropped from comment text (keywords are never filtered).
pub const CLOUD_STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "said", "each", "which",
    "their", "time", "would", "there", "could", "other",
];

/// Colour names cycled through by rank.
pub const PALETTE: [&str; 8] = [
    "blue", "green", "purple", "red", "indigo", "pink", "yellow", "teal",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub frequency: usize,
    pub font_size: f64,
    pub color: &'static str,
    /// Degrees, within `[-10, 10]`.
    pub rotation: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCloud {
    pub words: Vec<CloudWord>,
}

impl WordCloud {
    /// Build the cloud from the `max_words` most frequent words.
    #[must_use]
    pub fn build<C: CommentView>(comments: &[C], max_words: usize) -> Self {
        let mut words: Vec<String> = Vec::new();
        for comment in comments {
            words.extend(comment.keywords().iter().map(|k| k.to_lowercase()));
            words.extend(
                strip_punctuation(comment.text())
                    .split_whitespace()
                    .filter(|w| w.chars().count() > MAX_SHORT_WORD_CHARS)
                    .filter(|w| !CLOUD_STOP_WORDS.contains(w))
                    .map(str::to_string),
            );
        }

        let ranked = rank_by_frequency(words);
        let max_freq = ranked.first().map_or(1, |(_, freq)| *freq);

        let words = ranked
            .into_iter()
            .take(max_words)
            .enumerate()
            .map(|(rank, (word, frequency))| CloudWord {
                font_size: font_size(frequency, max_freq),
                color: color_for_rank(rank),
                rotation: rotation_for_rank(rank),
                word,
                frequency,
            })
            .collect();

        Self { words }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[allow(clippy::cast_precision_loss)]
fn font_size(frequency: usize, max_freq: usize) -> f64 {
    MIN_FONT_SIZE + (MAX_FONT_SIZE - MIN_FONT_SIZE) * frequency as f64 / max_freq.max(1) as f64
}

const fn color_for_rank(rank: usize) -> &'static str {
    PALETTE[rank % PALETTE.len()]
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn rotation_for_rank(rank: usize) -> i32 {
    let span = (2 * MAX_ROTATION + 1) as usize;
    ((rank * 7) % span) as i32 - MAX_ROTATION
}
