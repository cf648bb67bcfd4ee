//! HTTP wrapper around the RealWorld REST backend.

mod client;
mod dto;
mod error;
mod filter;

pub use client::ApiClient;
pub use dto::ArticleList;
pub use error::{extract_error_message, ApiError};
pub use filter::ArticleFilter;
