//! Analysis engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default simulated inference latency in milliseconds.
const fn default_latency_ms() -> u64 {
    1500
}

/// How neutral-label confidence is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralConfidence {
    /// `0.5 + j * 0.3` with `j` drawn from OS randomness.
    #[default]
    Jittered,
    /// Deterministic midpoint of the jitter range (0.65).
    Fixed,
}

/// How tokens are compared against lexicon entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Token contains the entry or the entry contains the token.
    #[default]
    Loose,
    /// Token equals the entry.
    WholeToken,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Artificial delay before a batch is released, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default)]
    pub neutral_confidence: NeutralConfidence,

    #[serde(default)]
    pub match_mode: MatchMode,
}

impl EngineConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            neutral_confidence: NeutralConfidence::default(),
            match_mode: MatchMode::default(),
        }
    }
}
