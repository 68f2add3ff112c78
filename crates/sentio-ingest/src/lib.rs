//! # sentio-ingest
//!
//! Collects raw comments for analysis.
//!
//! Comments arrive either typed in manually or as lines of a plain-text / CSV
//! file. CSV files are not parsed into columns: every non-empty trimmed line
//! is one comment. The [`CommentQueue`] owns pending comments in insertion
//! order until the caller hands them to the engine.

mod error;

pub use error::IngestError;

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use sentio_core::entities::RawComment;
use sentio_core::enums::CommentSource;
use sentio_core::errors::CoreError;
use sentio_core::ids::generate_comment_id;

/// Attempts at drawing a fresh ID before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Split file contents into comment texts: one per non-empty trimmed line.
#[must_use]
pub fn split_lines(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode file bytes as UTF-8, replacing invalid sequences and stripping a
/// leading BOM.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Cow::Owned(text) => match text.strip_prefix('\u{feff}') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(text),
        },
    }
}

/// Ordered set of comments waiting to be analyzed.
#[derive(Debug, Default, Clone)]
pub struct CommentQueue {
    comments: Vec<RawComment>,
    ids: HashSet<String>,
}

impl CommentQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a manually typed comment. Returns the new comment's ID.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::EmptyComment`] for blank text.
    pub fn add_manual(&mut self, text: &str) -> Result<String, IngestError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IngestError::EmptyComment);
        }
        self.push(text, CommentSource::Manual)
    }

    /// Queue every non-empty line of `contents` as a file comment.
    /// Returns how many comments were added.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Core`] if an ID cannot be generated.
    pub fn add_file_contents(&mut self, contents: &str) -> Result<usize, IngestError> {
        let lines = split_lines(contents);
        for line in &lines {
            self.push(line, CommentSource::File)?;
        }
        tracing::debug!(added = lines.len(), total = self.len(), "queued file comments");
        Ok(lines.len())
    }

    /// Read a text or CSV file and queue its lines.
    ///
    /// Invalid UTF-8 sequences become U+FFFD and a leading byte order mark is
    /// dropped, so legacy-encoded exports still load.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Read`] if the file cannot be read.
    pub fn add_file(&mut self, path: &Path) -> Result<usize, IngestError> {
        let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = decode_text(&bytes);
        self.add_file_contents(&contents)
    }

    /// Remove one comment by ID. Returns whether it was queued.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.comments.retain(|c| c.id != id);
        true
    }

    /// Drop every queued comment.
    pub fn reset(&mut self) {
        self.comments.clear();
        self.ids.clear();
    }

    #[must_use]
    pub fn comments(&self) -> &[RawComment] {
        &self.comments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    #[must_use]
    pub fn into_comments(self) -> Vec<RawComment> {
        self.comments
    }

    fn push(&mut self, text: &str, source: CommentSource) -> Result<String, IngestError> {
        let id = self.fresh_id()?;
        self.ids.insert(id.clone());
        self.comments.push(RawComment::new(id.clone(), text, source));
        Ok(id)
    }

    fn fresh_id(&self) -> Result<String, IngestError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_comment_id()?;
            if !self.ids.contains(&id) {
                return Ok(id);
            }
        }
        Err(IngestError::Core(CoreError::Validation(format!(
            "could not draw a unique comment id after {MAX_ID_ATTEMPTS} attempts"
        ))))
    }
}
