//! Wire-level data model shared by the API client and the state slices.

mod article;
mod comment;
mod profile;
mod user;

pub use article::{Article, ArticleDraft};
pub use comment::Comment;
pub use profile::Profile;
pub use user::{LoginRequest, NewUser, UpdateUser, User};
