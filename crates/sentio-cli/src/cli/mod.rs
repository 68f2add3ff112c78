use std::path::PathBuf;

use clap::Parser;
use sentio_config::SentioConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sentio` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sentio",
    version,
    about = "Sentio - sentiment analysis for eConsultation comments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the project config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract global flags, filling the output format from configuration
    /// when `--format` was not given.
    pub fn global_flags(&self, config: &SentioConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.general.default_format)?,
        };
        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
        })
    }
}
