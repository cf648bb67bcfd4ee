use crate::model::Article;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticlesIntent {
    /// A list request went out.
    Pending,
    /// A list request returned; replaces the visible collection.
    Loaded {
        articles: Vec<Article>,
        articles_count: u32,
    },
    Failed(String),
    /// A favorite or unfavorite request went out.
    FavoritePending,
    /// A favorite round trip returned the updated article.
    Upserted(Article),
    /// A favorite round trip failed. The list itself stays as it was.
    FavoriteFailed(String),
    Reset,
}

impl Intent for ArticlesIntent {}
