use std::future::Future;

use tracing::{debug, warn};

use crate::actions::{report, Conduit};
use crate::api::{ApiError, ArticleFilter, ArticleList};
use crate::state::article_page::ArticlePageIntent;
use crate::state::articles::ArticlesIntent;
use crate::state::home::FeedSource;
use crate::state::selectors;
use crate::state::RequestStatus;

impl Conduit {
    /// Global listing, optionally filtered. Replaces the visible list.
    pub async fn fetch_articles(&self, filter: ArticleFilter) -> RequestStatus {
        self.load_list("fetch_articles", self.api.list_articles(&filter))
            .await
    }

    /// Articles from followed authors. Replaces the visible list.
    pub async fn fetch_feed(&self, filter: ArticleFilter) -> RequestStatus {
        self.load_list("fetch_feed", self.api.feed(&filter)).await
    }

    pub async fn fetch_author_articles(&self, username: &str) -> RequestStatus {
        self.fetch_articles(ArticleFilter::by_author(username)).await
    }

    pub async fn fetch_favorited_articles(&self, username: &str) -> RequestStatus {
        self.fetch_articles(ArticleFilter::favorited_by(username))
            .await
    }

    /// Load one page of whatever the selected home tab stands for.
    pub async fn load_home_feed(&self, page: u32) -> RequestStatus {
        let source = self.store.select(|s| s.home.feed_source());
        let page_size = self.api.page_size();
        match source {
            FeedSource::Personal => {
                self.fetch_feed(ArticleFilter::default().page(page, page_size))
                    .await
            }
            FeedSource::Global => {
                self.fetch_articles(ArticleFilter::default().page(page, page_size))
                    .await
            }
            FeedSource::Tag(tag) => {
                self.fetch_articles(ArticleFilter::by_tag(tag).page(page, page_size))
                    .await
            }
        }
    }

    async fn load_list(
        &self,
        operation: &'static str,
        request: impl Future<Output = Result<ArticleList, ApiError>>,
    ) -> RequestStatus {
        self.store.dispatch(ArticlesIntent::Pending);
        match request.await {
            Ok(list) => {
                debug!(operation, count = list.articles.len(), "articles loaded");
                self.store.dispatch(ArticlesIntent::Loaded {
                    articles: list.articles,
                    articles_count: list.articles_count,
                });
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store
                    .dispatch(ArticlesIntent::Failed(report(operation, &e)));
                RequestStatus::Failed
            }
        }
    }

    pub async fn favorite(&self, slug: &str) -> RequestStatus {
        self.set_favorite(slug, true).await
    }

    pub async fn unfavorite(&self, slug: &str) -> RequestStatus {
        self.set_favorite(slug, false).await
    }

    /// Flip the favorite flag based on the cached article, without asking
    /// the backend for its current state first.
    pub async fn toggle_favorite(&self, slug: &str) -> RequestStatus {
        let cached = self
            .store
            .select(|s| selectors::cached_favorited(s, slug));
        match cached {
            Some(true) => self.unfavorite(slug).await,
            Some(false) => self.favorite(slug).await,
            None => {
                warn!(slug, "toggle_favorite on an article that is not loaded");
                RequestStatus::Failed
            }
        }
    }

    async fn set_favorite(&self, slug: &str, favorite: bool) -> RequestStatus {
        self.store.dispatch(ArticlesIntent::FavoritePending);
        let (operation, result) = if favorite {
            ("favorite", self.api.favorite(slug).await)
        } else {
            ("unfavorite", self.api.unfavorite(slug).await)
        };

        match result {
            Ok(article) => {
                debug!(
                    slug,
                    favorited = article.favorited,
                    count = article.favorites_count,
                    "favorite updated"
                );
                self.store
                    .dispatch(ArticlePageIntent::ArticleRefreshed(article.clone()));
                self.store.dispatch(ArticlesIntent::Upserted(article));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store
                    .dispatch(ArticlesIntent::FavoriteFailed(report(operation, &e)));
                RequestStatus::Failed
            }
        }
    }
}
