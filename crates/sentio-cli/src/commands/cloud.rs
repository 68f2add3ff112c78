use anyhow::Context;
use sentio_config::SentioConfig;
use sentio_report::{WordCloud, read_export};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CloudArgs;
use crate::output::output;

/// Handle `sentio cloud`.
pub fn handle(args: &CloudArgs, config: &SentioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let max_words = args.max_words.unwrap_or(config.report.cloud_max_words);
    if max_words == 0 {
        anyhow::bail!("--max-words must be at least 1");
    }

    let doc = read_export(&args.path)
        .with_context(|| format!("failed to read export {}", args.path.display()))?;
    let cloud = WordCloud::build(&doc.comments, max_words);
    tracing::debug!(words = cloud.words.len(), "built word cloud");
    output(&cloud.words, flags.format)
}
