//! Aggregation and word-cloud configuration.

use serde::{Deserialize, Serialize};

/// Default number of key concerns / positive themes.
const fn default_top_keywords() -> usize {
    5
}

/// Default number of words kept in the word cloud.
const fn default_cloud_max_words() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// How many keywords the concern and theme tallies keep.
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// How many words the word cloud keeps.
    #[serde(default = "default_cloud_max_words")]
    pub cloud_max_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_keywords: default_top_keywords(),
            cloud_max_words: default_cloud_max_words(),
        }
    }
}
