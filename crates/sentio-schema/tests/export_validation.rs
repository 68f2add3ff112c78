//! Validation of exported analysis documents against the published schema.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use sentio_core::entities::AnalyzedComment;
use sentio_core::enums::Sentiment;
use sentio_core::export::ExportDocument;
use sentio_schema::{SchemaError, SchemaRegistry};

fn document() -> ExportDocument {
    let comments = vec![
        AnalyzedComment {
            id: "cmt-00000001".into(),
            text: "I support the proposed disclosure threshold.".into(),
            sentiment: Sentiment::Positive,
            confidence: 0.95,
            summary: "Stakeholder expresses support: I support the proposed disclosure threshold".into(),
            keywords: vec!["support".into(), "proposed".into(), "disclosure".into()],
        },
        AnalyzedComment {
            id: "cmt-00000002".into(),
            text: "Please clarify section 4".into(),
            sentiment: Sentiment::Neutral,
            confidence: 0.71,
            summary: "Stakeholder suggests: Please clarify section 4".into(),
            keywords: vec!["please".into(), "clarify".into(), "section".into()],
        },
    ];
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    ExportDocument::from_comments(&comments, at)
}

#[test]
fn generated_export_is_valid() {
    let reg = SchemaRegistry::new();
    let json = serde_json::to_value(document()).unwrap();
    reg.validate_export(&json).expect("export should validate");
}

#[test]
fn export_missing_distribution_is_rejected() {
    let reg = SchemaRegistry::new();
    let mut json = serde_json::to_value(document()).unwrap();
    json.as_object_mut().unwrap().remove("sentimentDistribution");
    assert!(matches!(
        reg.validate_export(&json),
        Err(SchemaError::ValidationFailed { .. })
    ));
}

#[test]
fn export_with_unknown_label_is_rejected() {
    let reg = SchemaRegistry::new();
    let mut json = serde_json::to_value(document()).unwrap();
    json["comments"][1]["sentiment"] = serde_json::json!("mixed");
    let err = reg.validate_export(&json).unwrap_err();
    assert!(err.to_string().starts_with("validation failed"));
}

#[test]
fn exported_schema_uses_camel_case_properties() {
    let reg = SchemaRegistry::new();
    let schema = reg.get("export_document").unwrap();
    let mut props: Vec<&str> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    props.sort_unstable();
    assert_eq!(
        props,
        vec!["comments", "sentimentDistribution", "timestamp", "totalComments"]
    );
}
