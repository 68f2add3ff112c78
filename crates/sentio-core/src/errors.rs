//! Cross-cutting error types for Sentio.
//!
//! Domain-specific errors (e.g., `EngineError`, `IngestError`) are defined in
//! their respective crates. They converge into `anyhow` in `sentio-cli`.

use thiserror::Error;

/// Errors that can be raised by any Sentio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
