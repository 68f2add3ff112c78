//! Analyze, export, and read back through the filesystem.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use sentio_config::{EngineConfig, NeutralConfidence, ReportConfig};
use sentio_core::entities::RawComment;
use sentio_core::enums::CommentSource;
use sentio_core::export::ExportDocument;
use sentio_engine::AnalysisEngine;
use sentio_report::{
    ConsultationReport, ReportError, WordCloud, default_export_path, read_export, write_export,
};

fn analyzed() -> Vec<sentio_core::entities::AnalyzedComment> {
    let config = EngineConfig {
        latency_ms: 0,
        neutral_confidence: NeutralConfidence::Fixed,
        ..EngineConfig::default()
    };
    let raw = [
        "This is an excellent and beneficial proposal, I fully support it",
        "This proposal is harmful and problematic, I strongly oppose it",
        "Please consider and evaluate this alternative proposal",
        "The reporting burden is unreasonable for small cooperatives",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| RawComment::new(format!("cmt-{i:08x}"), *text, CommentSource::File))
    .collect::<Vec<_>>();

    AnalysisEngine::new(&config)
        .analyze_now(&raw)
        .expect("non-empty batch")
}

#[test]
fn export_reads_back_identically() {
    let comments = analyzed();
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let doc = ExportDocument::from_comments(&comments, at);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = default_export_path(&dir.path().join("exports"), at);
    write_export(&path, &doc).expect("export should write");
    assert!(path.ends_with("sentiment-analysis-2026-10-18.json"));

    let back = read_export(&path).expect("export should read back");
    assert_eq!(back, doc);
    assert_eq!(back.total_comments, 4);

    for (exported, original) in back.comments.iter().zip(&comments) {
        assert_eq!(exported.text, original.text);
        assert_eq!(exported.sentiment, original.sentiment);
        assert_eq!(exported.summary, original.summary);
        assert_eq!(exported.keywords, original.keywords);
        assert!((exported.confidence - original.confidence).abs() < 1e-12);
    }
}

#[test]
fn report_from_export_matches_report_from_results() {
    let comments = analyzed();
    let doc = ExportDocument::from_comments(&comments, Utc::now());
    let config = ReportConfig::default();

    assert_eq!(
        ConsultationReport::from_export(&doc, &config),
        ConsultationReport::build(&comments, &config)
    );
    assert_eq!(
        WordCloud::build(&doc.comments, 50),
        WordCloud::build(&comments, 50)
    );
}

#[test]
fn missing_export_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_export(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn tampered_export_is_rejected() {
    let comments = analyzed();
    let doc = ExportDocument::from_comments(&comments, Utc::now());
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tampered.json");
    write_export(&path, &doc).unwrap();

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    value["comments"][0]["sentiment"] = serde_json::json!("very positive");
    std::fs::write(&path, value.to_string()).unwrap();

    assert!(matches!(read_export(&path), Err(ReportError::Schema(_))));
}
