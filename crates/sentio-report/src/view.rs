use sentio_core::entities::AnalyzedComment;
use sentio_core::enums::Sentiment;
use sentio_core::export::ExportedComment;

/// Read access to the analyzed fields aggregation needs.
///
/// Implemented for freshly analyzed comments and for comments read back
/// from an export, which carry no ID.
pub trait CommentView {
    fn text(&self) -> &str;
    fn sentiment(&self) -> Sentiment;
    fn keywords(&self) -> &[String];
}

impl CommentView for AnalyzedComment {
    fn text(&self) -> &str {
        &self.text
    }

    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl CommentView for ExportedComment {
    fn text(&self) -> &str {
        &self.text
    }

    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
