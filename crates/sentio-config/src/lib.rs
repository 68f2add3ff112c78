//! # sentio-config
//!
//! Layered configuration loading for Sentio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SENTIO_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.sentio/config.toml`
//! 4. User-level `~/.config/sentio/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SENTIO_ENGINE__LATENCY_MS` -> `engine.latency_ms`,
//! `SENTIO_REPORT__TOP_KEYWORDS` -> `report.top_keywords`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sentio_config::SentioConfig;
//!
//! let config = SentioConfig::load_with_dotenv().expect("config");
//! println!("latency: {:?}", config.engine.latency());
//! ```

mod engine;
mod error;
mod general;
mod report;

pub use engine::{EngineConfig, MatchMode, NeutralConfidence};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for all overrides.
pub const ENV_PREFIX: &str = "SENTIO_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SentioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SentioConfig {
    /// Load configuration from all default sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `explicit` above the project file when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the default figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the provider chain with an optional explicit config file.
    #[must_use]
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sentio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.top_keywords == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.top_keywords".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.report.cloud_max_words == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.cloud_max_words".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !matches!(
            self.general.default_format.as_str(),
            "json" | "table" | "raw"
        ) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!(
                    "expected json, table or raw, got '{}'",
                    self.general.default_format
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sentio").join("config.toml"))
    }
}
