//! # Consultation Lexicon
//!
//! Three fixed cue lists used for plurality-vote classification of
//! stakeholder comments.

use sentio_config::MatchMode;

/// Cues that signal support.
pub const POSITIVE_CUES: &[&str] = &[
    "good",
    "excellent",
    "great",
    "positive",
    "support",
    "approve",
    "beneficial",
    "effective",
    "improvement",
    "strengthen",
    "enhance",
    "valuable",
    "important",
    "necessary",
    "recommend",
    "agree",
    "constructive",
    "helpful",
    "meaningful",
];

/// Cues that signal objection.
pub const NEGATIVE_CUES: &[&str] = &[
    "bad",
    "poor",
    "negative",
    "oppose",
    "disagree",
    "harmful",
    "ineffective",
    "problematic",
    "concerning",
    "inadequate",
    "insufficient",
    "unfair",
    "reject",
    "against",
    "inappropriate",
    "flawed",
    "unreasonable",
    "unacceptable",
];

/// Cues that signal a suggestion or request for change.
pub const NEUTRAL_CUES: &[&str] = &[
    "consider",
    "suggest",
    "clarify",
    "modify",
    "adjust",
    "review",
    "examine",
    "evaluate",
    "analyze",
    "assess",
    "alternative",
    "proposal",
    "recommendation",
];

/// Tokens shorter than this many characters are ignored.
const MIN_TOKEN_CHARS: usize = 3;

/// Per-list hit counts for one comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// The three cue lists plus the comparison rule.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
    mode: MatchMode,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl Lexicon {
    /// Standard consultation lexicon with the given match mode.
    #[must_use]
    pub const fn new(mode: MatchMode) -> Self {
        Self {
            positive: POSITIVE_CUES,
            negative: NEGATIVE_CUES,
            neutral: NEUTRAL_CUES,
            mode,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Count how many tokens hit each list. A token counts at most once per list.
    #[must_use]
    pub fn tally<S: AsRef<str>>(&self, tokens: &[S]) -> Tally {
        let mut tally = Tally::default();
        for token in tokens {
            let token = token.as_ref();
            if self.hits(self.positive, token) {
                tally.positive += 1;
            }
            if self.hits(self.negative, token) {
                tally.negative += 1;
            }
            if self.hits(self.neutral, token) {
                tally.neutral += 1;
            }
        }
        tally
    }

    fn hits(&self, cues: &[&str], token: &str) -> bool {
        match self.mode {
            // Substring in either direction, so "supports" hits "support".
            MatchMode::Loose => cues
                .iter()
                .any(|cue| token.contains(cue) || cue.contains(token)),
            MatchMode::WholeToken => cues.contains(&token),
        }
    }
}

/// Lowercase, split on runs of non-word characters, drop tokens of two
/// characters or fewer. Word characters are ASCII letters, digits and `_`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
