use sentio_config::SentioConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SentioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, config, flags).await,
        Commands::Report(args) => commands::report::handle(&args, config, flags),
        Commands::Cloud(args) => commands::cloud::handle(&args, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
