//! # sentio-report
//!
//! Consultation-level views of an analysis run.
//!
//! - [`ConsultationReport`]: distribution, overall tone, recurring concerns
//!   and themes, recommendations, and the executive summary paragraph.
//! - [`WordCloud`]: ranked words with deterministic size, colour, and rotation.
//! - [`SentimentStyle`]: how each label is drawn in the terminal.
//! - Export I/O: writing the JSON artifact and reading it back validated.
//!
//! Everything here is generic over [`CommentView`], so a report can be built
//! from fresh engine output or from a previously exported file.

mod cloud;
mod error;
mod export;
mod narrative;
mod report;
mod style;
mod themes;
mod tone;
mod view;

pub use cloud::{CLOUD_STOP_WORDS, CloudWord, PALETTE, WordCloud};
pub use error::ReportError;
pub use export::{
    default_export_file_name, default_export_path, parse_export, read_export, write_export,
};
pub use narrative::{executive_summary, recommendations};
pub use report::{ConsultationReport, SentimentShares};
pub use style::SentimentStyle;
pub use themes::{key_concerns, positive_themes, top_keywords};
pub use tone::OverallTone;
pub use view::CommentView;
