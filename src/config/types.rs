use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Settings for the REST backend connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (e.g., "https://api.realworld.io/api").
    pub base_url: String,
    /// Scheme word placed before the token in the `Authorization` header.
    pub auth_scheme: String,
    /// Total request timeout in seconds.
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_seconds: u64,
    /// Default `limit` for article list queries.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.realworld.io/api".to_string(),
            auth_scheme: "Token".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
            page_size: 10,
        }
    }
}

/// Where the session token survives process restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit session file. `None` means the platform data directory.
    pub session_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the session file location.
    ///
    /// Uses `~/.local/share/conduit/session.toml` on Linux or the
    /// platform equivalent via `dirs::data_dir()`.
    pub fn resolved_session_path(&self) -> PathBuf {
        match &self.session_path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("conduit")
                .join("session.toml"),
        }
    }
}
