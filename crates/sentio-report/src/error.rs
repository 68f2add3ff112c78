use std::path::PathBuf;

use sentio_schema::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export does not match schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("export totals disagree with its comments: {0}")]
    Inconsistent(String),
}
