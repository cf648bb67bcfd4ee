use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::dto::{
    ArticleBody, ArticleEnvelope, ArticleList, CommentBody, CommentEnvelope, CommentList,
    NewComment, ProfileEnvelope, TagList, UserBody, UserEnvelope,
};
use crate::api::error::{extract_error_message, ApiError};
use crate::api::filter::ArticleFilter;
use crate::config::{build_auth_header, ApiConfig, SecureString};
use crate::model::{
    Article, ArticleDraft, Comment, LoginRequest, NewUser, Profile, UpdateUser, User,
};

/// REST client bound to one backend base URL.
///
/// Holds the default credential. Once a token is set, every request
/// carries `Authorization: <scheme> <token>` until it is cleared.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    auth_scheme: String,
    page_size: u32,
    token: RwLock<Option<SecureString>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(format!(
                "{}: cannot be used as a base URL",
                config.base_url
            )));
        }

        let http = Client::builder()
            .user_agent(format!("conduit/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_scheme: config.auth_scheme.clone(),
            page_size: config.page_size,
            token: RwLock::new(None),
        })
    }

    /// Replace (or clear) the credential attached to every request.
    pub fn set_token(&self, token: Option<SecureString>) {
        *self.token.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- auth ----------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: UserEnvelope = self
            .send_json(Method::POST, &["users", "login"], &UserBody { user: &request })
            .await?;
        Ok(envelope.user)
    }

    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send_json(Method::POST, &["users"], &UserBody { user })
            .await?;
        Ok(envelope.user)
    }

    /// `GET /user`: resolve the user the current token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.get(&["user"], &[]).await?;
        Ok(envelope.user)
    }

    pub async fn update_user(&self, update: &UpdateUser) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send_json(Method::PUT, &["user"], &UserBody { user: update })
            .await?;
        Ok(envelope.user)
    }

    // -- articles ------------------------------------------------------------

    pub async fn tags(&self) -> Result<Vec<String>, ApiError> {
        let list: TagList = self.get(&["tags"], &[]).await?;
        Ok(list.tags)
    }

    pub async fn list_articles(&self, filter: &ArticleFilter) -> Result<ArticleList, ApiError> {
        self.get(&["articles"], &filter.query_pairs(self.page_size))
            .await
    }

    /// Articles by authors the current user follows.
    pub async fn feed(&self, filter: &ArticleFilter) -> Result<ArticleList, ApiError> {
        self.get(&["articles", "feed"], &filter.query_pairs(self.page_size))
            .await
    }

    pub async fn get_article(&self, slug: &str) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self.get(&["articles", slug], &[]).await?;
        Ok(envelope.article)
    }

    pub async fn create_article(&self, draft: &ArticleDraft) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self
            .send_json(Method::POST, &["articles"], &ArticleBody { article: draft })
            .await?;
        Ok(envelope.article)
    }

    pub async fn update_article(
        &self,
        slug: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self
            .send_json(Method::PUT, &["articles", slug], &ArticleBody { article: draft })
            .await?;
        Ok(envelope.article)
    }

    pub async fn delete_article(&self, slug: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &["articles", slug]).await
    }

    pub async fn favorite(&self, slug: &str) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self
            .send(Method::POST, &["articles", slug, "favorite"])
            .await?;
        Ok(envelope.article)
    }

    pub async fn unfavorite(&self, slug: &str) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self
            .send(Method::DELETE, &["articles", slug, "favorite"])
            .await?;
        Ok(envelope.article)
    }

    // -- comments ------------------------------------------------------------

    pub async fn comments(&self, slug: &str) -> Result<Vec<Comment>, ApiError> {
        let list: CommentList = self.get(&["articles", slug, "comments"], &[]).await?;
        Ok(list.comments)
    }

    pub async fn add_comment(&self, slug: &str, body: &str) -> Result<Comment, ApiError> {
        let payload = CommentBody {
            comment: NewComment { body },
        };
        let envelope: CommentEnvelope = self
            .send_json(Method::POST, &["articles", slug, "comments"], &payload)
            .await?;
        Ok(envelope.comment)
    }

    pub async fn delete_comment(&self, slug: &str, id: u64) -> Result<(), ApiError> {
        let id = id.to_string();
        self.send_empty(Method::DELETE, &["articles", slug, "comments", &id])
            .await
    }

    // -- profiles ------------------------------------------------------------

    pub async fn profile(&self, username: &str) -> Result<Profile, ApiError> {
        let envelope: ProfileEnvelope = self.get(&["profiles", username], &[]).await?;
        Ok(envelope.profile)
    }

    pub async fn follow(&self, username: &str) -> Result<Profile, ApiError> {
        let envelope: ProfileEnvelope = self
            .send(Method::POST, &["profiles", username, "follow"])
            .await?;
        Ok(envelope.profile)
    }

    pub async fn unfollow(&self, username: &str) -> Result<Profile, ApiError> {
        let envelope: ProfileEnvelope = self
            .send(Method::DELETE, &["profiles", username, "follow"])
            .await?;
        Ok(envelope.profile)
    }

    // -- plumbing ------------------------------------------------------------

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        let token = self.token.read();
        match token
            .as_ref()
            .and_then(|t| build_auth_header(&self.auth_scheme, t))
        {
            Some((name, value)) => builder.header(name, value),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        let response = self.dispatch(self.request(Method::GET, url)).await?;
        decode(response).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let response = self.dispatch(self.request(method, url)).await?;
        decode(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let response = self
            .dispatch(self.request(method, url).json(body))
            .await?;
        decode(response).await
    }

    /// Any 2xx counts as success; DELETE endpoints answer 200 or 204.
    async fn send_empty(&self, method: Method, segments: &[&str]) -> Result<(), ApiError> {
        let url = self.endpoint(segments)?;
        self.dispatch(self.request(method, url)).await?;
        Ok(())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
