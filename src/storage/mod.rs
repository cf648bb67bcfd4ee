//! Durable storage for the session token.

mod token;

pub use token::{FileTokenStore, MemoryTokenStore, StorageError, TokenStore};
