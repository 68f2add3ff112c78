use std::path::{Path, PathBuf};

use anyhow::Context;
use sentio_config::SentioConfig;

/// Directory marking a Sentio project root.
const PROJECT_DIR: &str = ".sentio";

/// Load `.env` and then the layered configuration.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<SentioConfig> {
    load_project_dotenv()?;

    if let Some(path) = explicit
        && !path.is_file()
    {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }

    let config = SentioConfig::load_from(explicit).context("failed to load sentio configuration")?;
    tracing::debug!(
        latency_ms = config.engine.latency_ms,
        match_mode = ?config.engine.match_mode,
        neutral_confidence = ?config.engine.neutral_confidence,
        "configuration loaded"
    );
    Ok(config)
}

fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    if let Some(root) = find_project_root(&cwd) {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}

/// Nearest ancestor of `start` (inclusive) containing a `.sentio` directory.
fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}
