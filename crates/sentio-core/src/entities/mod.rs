//! Comment entities flowing through the analysis pipeline.

mod comment;

pub use comment::{AnalyzedComment, RawComment};
