use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sentio_config::{EngineConfig, MatchMode, SentioConfig};
use sentio_core::entities::AnalyzedComment;
use sentio_core::export::ExportDocument;
use sentio_engine::AnalysisEngine;
use sentio_ingest::CommentQueue;
use sentio_report::{ConsultationReport, SentimentStyle, default_export_path, write_export};

use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enum;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct AnalyzeResponse<'a> {
    comments: &'a [AnalyzedComment],
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ConsultationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_path: Option<String>,
}

/// One line of the analyzed-comments table.
#[derive(Debug, Serialize)]
struct CommentRow {
    id: String,
    sentiment: String,
    confidence: String,
    summary: String,
    keywords: Vec<String>,
}

impl From<&AnalyzedComment> for CommentRow {
    fn from(comment: &AnalyzedComment) -> Self {
        Self {
            id: comment.id.clone(),
            sentiment: SentimentStyle::of(comment.sentiment).badge(),
            confidence: format!("{:.2}", comment.confidence),
            summary: comment.summary.clone(),
            keywords: comment.keywords.clone(),
        }
    }
}

/// Handle `sentio analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &SentioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let queue = collect_comments(args)?;
    if queue.is_empty() {
        anyhow::bail!("no comments to analyze: pass --comment TEXT or a FILE with non-empty lines");
    }

    let engine = AnalysisEngine::new(&engine_config(args, &config.engine)?);
    let comments = queue.into_comments();

    let progress = Progress::spinner(&format!("Analyzing {} comments...", comments.len()));
    let results = match engine.analyze(&comments).await {
        Ok(results) => {
            progress.finish_clear();
            results
        }
        Err(error) => {
            progress.finish_err("analysis failed");
            return Err(error).context("sentiment analysis failed");
        }
    };

    let timestamp = Utc::now();
    let export_path = export_target(args, config, timestamp);
    if let Some(path) = &export_path {
        let doc = ExportDocument::from_comments(&results, timestamp);
        write_export(path, &doc)
            .with_context(|| format!("failed to write export {}", path.display()))?;
    }

    let report = args
        .report
        .then(|| ConsultationReport::build(&results, &config.report));

    match flags.format {
        OutputFormat::Table => {
            let rows: Vec<CommentRow> = results.iter().map(CommentRow::from).collect();
            output(&rows, flags.format)?;
            if let Some(report) = &report {
                println!();
                output(report, flags.format)?;
            }
            if let Some(path) = &export_path
                && !flags.quiet
            {
                println!("\nexport written to {}", path.display());
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => {
            let response = AnalyzeResponse {
                comments: &results,
                report: report.as_ref(),
                export_path: export_path.map(|p| p.display().to_string()),
            };
            output(&response, flags.format)
        }
    }
}

fn collect_comments(args: &AnalyzeArgs) -> anyhow::Result<CommentQueue> {
    let mut queue = CommentQueue::new();
    for text in &args.comments {
        queue
            .add_manual(text)
            .with_context(|| format!("invalid --comment '{text}'"))?;
    }
    for path in &args.files {
        let added = queue
            .add_file(path)
            .with_context(|| format!("failed to ingest {}", path.display()))?;
        if added == 0 {
            tracing::warn!(path = %path.display(), "file contained no comments");
        }
    }
    tracing::debug!(comments = queue.len(), "comment queue ready");
    Ok(queue)
}

fn engine_config(args: &AnalyzeArgs, base: &EngineConfig) -> anyhow::Result<EngineConfig> {
    let mut config = base.clone();
    if let Some(ms) = args.latency_ms {
        config.latency_ms = ms;
    }
    if let Some(raw) = &args.match_mode {
        config.match_mode = parse_enum::<MatchMode>(raw, "match mode")?;
    }
    tracing::debug!(latency = ?Duration::from_millis(config.latency_ms), "engine configured");
    Ok(config)
}

/// Where to write the export, if anywhere: `--export`, then `--export-dir`,
/// then `general.export_dir` from configuration.
fn export_target(
    args: &AnalyzeArgs,
    config: &SentioConfig,
    timestamp: DateTime<Utc>,
) -> Option<PathBuf> {
    if let Some(path) = &args.export {
        return Some(path.clone());
    }
    let dir = args.export_dir.clone().or_else(|| {
        let configured = config.general.export_dir.trim();
        (!configured.is_empty()).then(|| PathBuf::from(configured))
    })?;
    Some(default_export_path(&dir, timestamp))
}
