//! Ingestion error types.

use std::path::PathBuf;

use sentio_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Manual input was empty after trimming.
    #[error("Comment text is empty")]
    EmptyComment,

    /// The comments file could not be read.
    #[error("Failed to read comments file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ID generation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
