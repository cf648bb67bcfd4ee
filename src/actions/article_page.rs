use tracing::{debug, warn};

use crate::actions::{report, Conduit};
use crate::state::article_page::ArticlePageIntent;
use crate::state::RequestStatus;

impl Conduit {
    /// Start a page session for `slug` and load the article and its
    /// comments side by side.
    pub async fn open_article(&self, slug: &str) -> RequestStatus {
        self.store.dispatch(ArticlePageIntent::Enter {
            slug: slug.to_string(),
        });
        let (article, _) = tokio::join!(self.fetch_article(slug), self.fetch_comments(slug));
        article
    }

    /// Drop the page session, comments included.
    pub fn leave_article(&self) {
        self.store.dispatch(ArticlePageIntent::Leave);
    }

    pub async fn fetch_article(&self, slug: &str) -> RequestStatus {
        let slug = slug.to_string();
        self.store.dispatch(ArticlePageIntent::ArticlePending { slug: slug.clone() });
        match self.api.get_article(&slug).await {
            Ok(article) => {
                self.store
                    .dispatch(ArticlePageIntent::ArticleLoaded { slug, article });
                RequestStatus::Succeeded
            }
            Err(e) => {
                let message = report("fetch_article", &e);
                self.store
                    .dispatch(ArticlePageIntent::ArticleFailed { slug, message });
                RequestStatus::Failed
            }
        }
    }

    pub async fn fetch_comments(&self, slug: &str) -> RequestStatus {
        let slug = slug.to_string();
        self.store.dispatch(ArticlePageIntent::CommentsPending { slug: slug.clone() });
        match self.api.comments(&slug).await {
            Ok(comments) => {
                debug!(slug = %slug, count = comments.len(), "comments loaded");
                self.store
                    .dispatch(ArticlePageIntent::CommentsLoaded { slug, comments });
                RequestStatus::Succeeded
            }
            Err(e) => {
                let message = report("fetch_comments", &e);
                self.store
                    .dispatch(ArticlePageIntent::CommentFailed { slug, message });
                RequestStatus::Failed
            }
        }
    }

    pub fn update_draft(&self, text: impl Into<String>) {
        self.store
            .dispatch(ArticlePageIntent::DraftChanged(text.into()));
    }

    /// Post the current draft on the open article.
    ///
    /// The draft is cleared as soon as the submit is dispatched and is not
    /// restored if the backend rejects the comment.
    pub async fn post_comment(&self) -> RequestStatus {
        let page = self.store.select(|s| {
            s.article_page
                .slug
                .clone()
                .map(|slug| (slug, s.article_page.draft.clone()))
        });
        let Some((slug, body)) = page else {
            warn!("post_comment without an open article");
            return RequestStatus::Failed;
        };

        self.store
            .dispatch(ArticlePageIntent::CommentSubmitted { slug: slug.clone() });
        match self.api.add_comment(&slug, &body).await {
            Ok(comment) => {
                self.store
                    .dispatch(ArticlePageIntent::CommentPosted { slug, comment });
                RequestStatus::Succeeded
            }
            Err(e) => {
                let message = report("post_comment", &e);
                self.store
                    .dispatch(ArticlePageIntent::CommentFailed { slug, message });
                RequestStatus::Failed
            }
        }
    }

    /// Delete a comment on the open article. The local list changes only
    /// after the backend confirms.
    pub async fn delete_comment(&self, id: u64) -> RequestStatus {
        let Some(slug) = self.store.select(|s| s.article_page.slug.clone()) else {
            warn!(id, "delete_comment without an open article");
            return RequestStatus::Failed;
        };

        match self.api.delete_comment(&slug, id).await {
            Ok(()) => {
                self.store
                    .dispatch(ArticlePageIntent::CommentDeleted { slug, id });
                RequestStatus::Succeeded
            }
            Err(e) => {
                let message = report("delete_comment", &e);
                self.store
                    .dispatch(ArticlePageIntent::CommentFailed { slug, message });
                RequestStatus::Failed
            }
        }
    }

    /// Delete an article. The list store is left alone; the view navigates
    /// away and the next listing no longer contains it.
    pub async fn delete_article(&self, slug: &str) -> RequestStatus {
        let slug = slug.to_string();
        self.store.dispatch(ArticlePageIntent::DeletePending { slug: slug.clone() });
        match self.api.delete_article(&slug).await {
            Ok(()) => {
                self.store.dispatch(ArticlePageIntent::ArticleDeleted { slug });
                RequestStatus::Succeeded
            }
            Err(e) => {
                let message = report("delete_article", &e);
                self.store
                    .dispatch(ArticlePageIntent::ArticleFailed { slug, message });
                RequestStatus::Failed
            }
        }
    }
}
