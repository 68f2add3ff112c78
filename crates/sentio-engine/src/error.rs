//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Analysis was requested for zero comments.
    #[error("No comments to analyze")]
    EmptyInput,

    /// Two comments in one batch share an ID.
    #[error("Duplicate comment id in batch: {0}")]
    DuplicateId(String),
}
