//! # sentio-core
//!
//! Core types, ID generation, and error types for Sentio.
//!
//! This crate provides the foundational types shared across all Sentio crates:
//! - Comment structs for raw input and analyzed output
//! - Sentiment and comment-source enums
//! - Comment ID generation helpers
//! - Cross-cutting error types
//! - The JSON export document and sentiment distribution

pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod ids;
