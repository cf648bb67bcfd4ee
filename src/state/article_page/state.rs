use crate::model::{Article, Comment};
use crate::state::mvi::SliceState;
use crate::state::status::RequestStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticlePageState {
    /// Slug of the page currently on screen. `None` when no page is open.
    pub slug: Option<String>,
    pub article: Option<Article>,
    pub comments: Vec<Comment>,
    /// Text of the new-comment box.
    pub draft: String,
    pub status: RequestStatus,
    pub comment_status: RequestStatus,
    pub error: Option<String>,
    /// Set once the backend confirmed deletion; the view navigates away.
    pub deleted: bool,
}

impl SliceState for ArticlePageState {}

impl ArticlePageState {
    pub fn is_current(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }
}
