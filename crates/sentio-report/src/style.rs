//! Terminal presentation of sentiment labels.

use sentio_core::enums::Sentiment;

/// How one label is shown in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    /// SGR colour code, e.g. `32` for green.
    pub ansi: u8,
    pub glyph: &'static str,
    pub label: &'static str,
}

const POSITIVE: SentimentStyle = SentimentStyle {
    ansi: 32,
    glyph: "▲",
    label: "Positive",
};

const NEGATIVE: SentimentStyle = SentimentStyle {
    ansi: 31,
    glyph: "▼",
    label: "Negative",
};

const NEUTRAL: SentimentStyle = SentimentStyle {
    ansi: 90,
    glyph: "–",
    label: "Neutral",
};

impl SentimentStyle {
    #[must_use]
    pub const fn of(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => POSITIVE,
            Sentiment::Negative => NEGATIVE,
            Sentiment::Neutral => NEUTRAL,
        }
    }

    /// Wrap `text` in this style's colour.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("\u{1b}[{}m{text}\u{1b}[0m", self.ansi)
    }

    /// Glyph and label, e.g. `"▲ Positive"`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} {}", self.glyph, self.label)
    }
}
