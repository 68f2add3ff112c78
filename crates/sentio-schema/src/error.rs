//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("validation failed: {}", errors.join("; "))]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error.
    #[error("schema generation error: {0}")]
    Generation(String),
}
