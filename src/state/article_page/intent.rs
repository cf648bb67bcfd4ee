use crate::model::{Article, Comment};
use crate::state::mvi::Intent;

/// Events of one article page session.
///
/// Request results carry the slug they were issued for; results for a
/// slug that is no longer on screen are dropped by the reducer.
#[derive(Debug, Clone)]
pub enum ArticlePageIntent {
    /// Navigation onto an article page. Discards the previous page.
    Enter { slug: String },
    /// Navigation away. Comments are not cached.
    Leave,

    ArticlePending { slug: String },
    ArticleLoaded { slug: String, article: Article },
    ArticleFailed { slug: String, message: String },
    /// A fresh snapshot of an article arrived from elsewhere (favorite toggle).
    ArticleRefreshed(Article),

    DeletePending { slug: String },
    ArticleDeleted { slug: String },

    CommentsPending { slug: String },
    CommentsLoaded { slug: String, comments: Vec<Comment> },

    DraftChanged(String),
    /// Comment submit dispatched. Clears the draft before the server answers.
    CommentSubmitted { slug: String },
    CommentPosted { slug: String, comment: Comment },
    CommentDeleted { slug: String, id: u64 },
    CommentFailed { slug: String, message: String },
}

impl Intent for ArticlePageIntent {}
