//! Per-comment keyword extraction.

use std::collections::HashMap;

/// Most keywords returned for one comment.
pub const MAX_KEYWORDS: usize = 5;

/// Words shorter than this many characters are never keywords.
const MIN_KEYWORD_CHARS: usize = 4;

/// Common function words excluded from keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "as",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his",
    "its", "our", "their",
];

/// Whether `word` is in [`STOP_WORDS`].
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Lowercase and delete every character that is neither a word character
/// (ASCII letter, digit, `_`) nor whitespace.
#[must_use]
pub fn strip_punctuation(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Count `words` in first-seen order, then stable-sort by descending count.
#[must_use]
pub fn rank_by_frequency<I, S>(words: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for word in words {
        let word = word.into();
        if let Some(&slot) = index.get(&word) {
            ranked[slot].1 += 1;
        } else {
            index.insert(word.clone(), ranked.len());
            ranked.push((word, 1));
        }
    }
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Top [`MAX_KEYWORDS`] words of `text` by frequency, ties in first-seen order.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned = strip_punctuation(text);
    let candidates = cleaned.split_whitespace().filter(|word| {
        word.chars().count() >= MIN_KEYWORD_CHARS
            && !is_stop_word(word)
            && !word.chars().all(|c| c.is_ascii_digit())
    });

    rank_by_frequency(candidates)
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ranks_by_frequency_then_first_seen() {
        let keywords = extract_keywords(
            "Transparency transparency matters; the council, council & COUNCIL decides 2024 budget.",
        );
        assert_eq!(
            keywords,
            vec!["council", "transparency", "matters", "decides", "budget"]
        );
    }

    #[test]
    fn caps_at_five() {
        let keywords = extract_keywords("alpha bravo charlie delta echoes foxtrot golfs hotel");
        assert_eq!(keywords, vec!["alpha", "bravo", "charlie", "delta", "echoes"]);
    }

    #[test]
    fn drops_stop_words_short_words_and_numbers() {
        let keywords = extract_keywords("Those were their words: 12345 and 2024 but not more");
        assert_eq!(keywords, vec!["words", "more"]);
    }

    #[test]
    fn apostrophes_are_removed_before_length_check() {
        assert_eq!(extract_keywords("don't can't"), vec!["dont", "cant"]);
    }

    #[test]
    fn mixed_alphanumeric_tokens_are_kept() {
        assert_eq!(extract_keywords("section 12b and s2024"), vec!["section", "s2024"]);
    }

    #[test]
    fn empty_text_has_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("!!! ... ???").is_empty());
    }
}
