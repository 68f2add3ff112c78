//! Reading and writing the exported analysis file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use sentio_core::export::ExportDocument;
use sentio_schema::SchemaRegistry;

use crate::error::ReportError;

/// `sentiment-analysis-YYYY-MM-DD.json` for the given day.
#[must_use]
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("sentiment-analysis-{}.json", date.format("%Y-%m-%d"))
}

/// Default export location inside `dir`, dated by the export's UTC day.
#[must_use]
pub fn default_export_path(dir: &Path, timestamp: DateTime<Utc>) -> PathBuf {
    dir.join(default_export_file_name(timestamp.date_naive()))
}

/// Write `doc` as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory or file cannot be written.
pub fn write_export(path: &Path, doc: &ExportDocument) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), comments = doc.total_comments, "wrote export");
    Ok(())
}

/// Read an export file back, validating it before use.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read, and the errors of
/// [`parse_export`] otherwise.
pub fn read_export(path: &Path) -> Result<ExportDocument, ReportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_export(&json)
}

/// Parse export JSON, check it against the `export_document` schema, and
/// verify its totals agree with its comments.
///
/// # Errors
///
/// Returns [`ReportError::Json`] for malformed JSON, [`ReportError::Schema`]
/// for a document of the wrong shape, and [`ReportError::Inconsistent`] when
/// the stored counts do not match the comments.
pub fn parse_export(json: &str) -> Result<ExportDocument, ReportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    SchemaRegistry::new().validate_export(&value)?;
    let doc: ExportDocument = serde_json::from_value(value)?;

    if !doc.is_consistent() {
        let recount = doc.recount();
        return Err(ReportError::Inconsistent(format!(
            "stored {} comments ({}/{}/{}), counted {} ({}/{}/{})",
            doc.total_comments,
            doc.sentiment_distribution.positive,
            doc.sentiment_distribution.negative,
            doc.sentiment_distribution.neutral,
            doc.comments.len(),
            recount.positive,
            recount.negative,
            recount.neutral,
        )));
    }
    Ok(doc)
}
