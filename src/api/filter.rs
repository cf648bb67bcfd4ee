/// Query filters accepted by `GET /articles` and `GET /articles/feed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleFilter {
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    pub fn by_author(username: impl Into<String>) -> Self {
        Self {
            author: Some(username.into()),
            ..Default::default()
        }
    }

    pub fn favorited_by(username: impl Into<String>) -> Self {
        Self {
            favorited: Some(username.into()),
            ..Default::default()
        }
    }

    /// Select a zero-based page of `page_size` articles.
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.limit = Some(page_size);
        self.offset = Some(page.saturating_mul(page_size));
        self
    }

    /// Query pairs in wire order. `limit` falls back to `default_limit`
    /// and `offset` to zero, so every list request is explicitly paged.
    pub fn query_pairs(&self, default_limit: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.unwrap_or(default_limit).to_string()),
            ("offset", self.offset.unwrap_or(0).to_string()),
        ];
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(author) = &self.author {
            pairs.push(("author", author.clone()));
        }
        if let Some(favorited) = &self.favorited {
            pairs.push(("favorited", favorited.clone()));
        }
        pairs
    }
}
