use anyhow::Context;
use sentio_config::SentioConfig;
use sentio_report::{ConsultationReport, read_export};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::output::output;

/// Handle `sentio report`.
pub fn handle(args: &ReportArgs, config: &SentioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let doc = read_export(&args.path)
        .with_context(|| format!("failed to read export {}", args.path.display()))?;
    let report = ConsultationReport::from_export(&doc, &config.report);
    output(&report, flags.format)
}
