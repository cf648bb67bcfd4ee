//! Async orchestrators: one network call each, reconciled into the store.
//!
//! Every orchestrator dispatches a pending intent, awaits exactly one
//! request and dispatches the outcome. Failures are logged and folded
//! into a failed status; callers only ever see a [`RequestStatus`].
//!
//! There is no de-duplication or cancellation. Two concurrent calls for
//! the same entity both reach the backend and the store keeps whichever
//! response completes last.

mod article_page;
mod articles;
mod editor;
mod home;
mod profile;
mod session;

use std::fmt::Display;
use std::sync::Arc;

use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::state::Store;
use crate::storage::{FileTokenStore, TokenStore};

/// Client context: the HTTP wrapper, the store and durable token storage.
///
/// Cheap to clone; clones share all three.
#[derive(Clone)]
pub struct Conduit {
    api: Arc<ApiClient>,
    store: Store,
    tokens: Arc<dyn TokenStore>,
}

impl Conduit {
    pub fn new(api: ApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api: Arc::new(api),
            store: Store::new(),
            tokens,
        }
    }

    /// Build a context from configuration, storing the token on disk.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api)?;
        let tokens = FileTokenStore::new(config.storage.resolved_session_path());
        Ok(Self::new(api, Arc::new(tokens)))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }
}

/// Log a failed operation and turn the error into the retained message.
fn report(operation: &'static str, error: &impl Display) -> String {
    warn!(operation, error = %error, "request failed");
    error.to_string()
}
