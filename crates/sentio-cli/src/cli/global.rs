use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name such as `"table"`.
    pub fn from_config(raw: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(raw, true)
            .map_err(|error| anyhow::anyhow!("invalid general.default_format '{raw}': {error}"))
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}
