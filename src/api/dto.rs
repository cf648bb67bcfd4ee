//! Request and response envelopes of the RealWorld REST API.

use serde::{Deserialize, Serialize};

use crate::model::{Article, ArticleDraft, Comment, Profile, User};

/// One page of an article listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub articles_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleEnvelope {
    pub article: Article,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentEnvelope {
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentList {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagList {
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserBody<'a, T: Serialize> {
    pub user: &'a T,
}

#[derive(Debug, Serialize)]
pub(crate) struct ArticleBody<'a> {
    pub article: &'a ArticleDraft,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewComment<'a> {
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentBody<'a> {
    pub comment: NewComment<'a>,
}
