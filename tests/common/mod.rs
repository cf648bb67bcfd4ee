//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;

use conduit::api::ApiClient;
use conduit::config::ApiConfig;
use conduit::storage::{MemoryTokenStore, TokenStore};
use conduit::Conduit;
use serde_json::{json, Value};

use mock_backend::MockBackend;

pub const TIMESTAMP: &str = "2024-01-15T10:30:00.000Z";

/// Client context wired to `backend` with the given token storage.
pub fn client_with(backend: &MockBackend, tokens: Arc<dyn TokenStore>) -> Conduit {
    let config = ApiConfig {
        base_url: backend.base_url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    let api = ApiClient::new(&config).expect("mock base URL is valid");
    Conduit::new(api, tokens)
}

/// Client context with an empty in-memory token store.
pub fn client(backend: &MockBackend) -> Conduit {
    client_with(backend, Arc::new(MemoryTokenStore::new()))
}

// -- JSON fixtures ------------------------------------------------------------

pub fn profile_json(username: &str, following: bool) -> Value {
    json!({
        "username": username,
        "bio": null,
        "image": format!("https://example.com/{}.png", username),
        "following": following,
    })
}

pub fn article_json(slug: &str, author: &str, favorited: bool, favorites_count: u32) -> Value {
    json!({
        "slug": slug,
        "title": slug.replace('-', " "),
        "description": format!("About {}", slug),
        "body": format!("Body of {}", slug),
        "tagList": ["rust"],
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
        "favorited": favorited,
        "favoritesCount": favorites_count,
        "author": profile_json(author, false),
    })
}

pub fn article_list_json(articles: Vec<Value>, articles_count: u32) -> Value {
    json!({ "articles": articles, "articlesCount": articles_count })
}

pub fn comment_json(id: u64, body: &str, author: &str) -> Value {
    json!({
        "id": id,
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
        "body": body,
        "author": profile_json(author, false),
    })
}

pub fn user_json(username: &str, token: &str) -> Value {
    json!({
        "user": {
            "username": username,
            "email": format!("{}@example.com", username),
            "bio": null,
            "image": null,
            "token": token,
        }
    })
}
