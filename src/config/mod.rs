//! Configuration: file loading, validation and credential helpers.

mod credentials;
mod loader;
mod types;

pub use credentials::{build_auth_header, AuthHeader, SecureString};
pub use loader::{ConfigError, API_HOST_ENV};
pub use types::{ApiConfig, Config, StorageConfig};
