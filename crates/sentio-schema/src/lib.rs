//! # sentio-schema
//!
//! JSON Schema generation, validation, and registry for Sentio.
//!
//! Comment and export types are defined in `sentio-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] so exported analysis files can be validated when they
//! are read back, and so `sentio schema <name>` can print them.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{EXPORT_DOCUMENT, SchemaRegistry};
