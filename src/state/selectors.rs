//! Read-only projections of the root state used by views.

use crate::model::{Article, Comment, User};
use crate::state::home::Tab;
use crate::state::store::RootState;

/// Articles in the order the last list request returned them.
pub fn all_articles(state: &RootState) -> Vec<&Article> {
    state.articles.entities.iter().collect()
}

pub fn article_by_slug<'a>(state: &'a RootState, slug: &str) -> Option<&'a Article> {
    state.articles.entities.get(slug)
}

pub fn is_authenticated(state: &RootState) -> bool {
    state.session.is_authenticated
}

pub fn current_user(state: &RootState) -> Option<&User> {
    state.session.user.as_ref()
}

pub fn visible_tabs(state: &RootState) -> Vec<&Tab> {
    state.home.visible_tabs().collect()
}

/// Only the comment's author sees the delete control.
pub fn can_delete_comment(state: &RootState, comment: &Comment) -> bool {
    state.session.username() == Some(comment.author.username.as_str())
}

/// Only the article's author sees edit and delete controls.
pub fn can_edit_article(state: &RootState, article: &Article) -> bool {
    state.session.username() == Some(article.author.username.as_str())
}

/// Cached favorite flag, from the list first, then the open article page.
pub fn cached_favorited(state: &RootState, slug: &str) -> Option<bool> {
    state
        .articles
        .entities
        .get(slug)
        .or_else(|| {
            state
                .article_page
                .article
                .as_ref()
                .filter(|a| a.slug == slug)
        })
        .map(|a| a.favorited)
}
