//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory `analyze` writes its dated export into when neither
    /// `--export` nor `--export-dir` is given. Empty disables the export.
    #[serde(default)]
    pub export_dir: String,

    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            export_dir: String::new(),
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.export_dir.is_empty());
        assert_eq!(config.default_format, "json");
    }
}
