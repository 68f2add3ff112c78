use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze comments typed inline or read from text/CSV files.
    Analyze(AnalyzeArgs),
    /// Rebuild the consultation report from an export file.
    Report(ReportArgs),
    /// Build the word cloud model from an export file.
    Cloud(CloudArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `sentio analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Comment text (repeatable).
    #[arg(short = 'c', long = "comment", value_name = "TEXT")]
    pub comments: Vec<String>,

    /// Text or CSV files; every non-empty line is one comment.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write the export document to this path.
    #[arg(long, value_name = "PATH", conflicts_with = "export_dir")]
    pub export: Option<PathBuf>,

    /// Write `sentiment-analysis-YYYY-MM-DD.json` into this directory.
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Override engine.latency_ms.
    #[arg(long, value_name = "N")]
    pub latency_ms: Option<u64>,

    /// Override engine.match_mode: loose, whole-token.
    #[arg(long, value_name = "MODE")]
    pub match_mode: Option<String>,

    /// Include the consultation report.
    #[arg(long)]
    pub report: bool,
}

/// Arguments for `sentio report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Export document produced by `sentio analyze`.
    #[arg(value_name = "EXPORT.json")]
    pub path: PathBuf,
}

/// Arguments for `sentio cloud`.
#[derive(Clone, Debug, Args)]
pub struct CloudArgs {
    /// Export document produced by `sentio analyze`.
    #[arg(value_name = "EXPORT.json")]
    pub path: PathBuf,

    /// Override report.cloud_max_words.
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,
}

/// Arguments for `sentio schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name; lists all names when omitted.
    pub type_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).expect("cli should parse").command
    }

    #[test]
    fn analyze_accepts_inline_comments_and_files() {
        let Commands::Analyze(args) = parse(&[
            "sentio",
            "analyze",
            "-c",
            "I support this",
            "--comment",
            "Please clarify",
            "a.txt",
            "b.csv",
            "--latency-ms",
            "0",
            "--report",
        ]) else {
            panic!("expected analyze");
        };

        assert_eq!(args.comments, vec!["I support this", "Please clarify"]);
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.csv")]
        );
        assert_eq!(args.latency_ms, Some(0));
        assert!(args.report);
    }

    #[test]
    fn export_and_export_dir_conflict() {
        let parsed = Cli::try_parse_from([
            "sentio",
            "analyze",
            "-c",
            "x",
            "--export",
            "a.json",
            "--export-dir",
            "out",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cloud_max_words_is_optional() {
        let Commands::Cloud(args) = parse(&["sentio", "cloud", "e.json", "--max-words", "10"])
        else {
            panic!("expected cloud");
        };
        assert_eq!(args.max_words, Some(10));
    }

    #[test]
    fn schema_name_is_optional() {
        let Commands::Schema(args) = parse(&["sentio", "schema"]) else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, None);
    }
}
