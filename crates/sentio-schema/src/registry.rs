//! Central schema registry for Sentio types.
//!
//! The `SchemaRegistry` builds JSON Schemas from sentio-core types at
//! construction time using [`schemars::schema_for!`] and validates values
//! with `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Name of the schema every exported analysis file must satisfy.
pub const EXPORT_DOCUMENT: &str = "export_document";

/// Store of every JSON Schema Sentio publishes, keyed by snake_case name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a registry containing the comment, distribution, and export schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Comments ---
        register!(schemas, "raw_comment", sentio_core::entities::RawComment);
        register!(
            schemas,
            "analyzed_comment",
            sentio_core::entities::AnalyzedComment
        );

        // --- Export artifact ---
        register!(
            schemas,
            "sentiment_distribution",
            sentio_core::export::SentimentDistribution
        );
        register!(
            schemas,
            "exported_comment",
            sentio_core::export::ExportedComment
        );
        register!(schemas, EXPORT_DOCUMENT, sentio_core::export::ExportDocument);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate an exported analysis file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`].
    pub fn validate_export(&self, instance: &Value) -> Result<(), SchemaError> {
        self.validate(EXPORT_DOCUMENT, instance)
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
