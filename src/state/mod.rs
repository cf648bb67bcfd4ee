//! Client state: slices, reducers, the root store and selectors.

pub mod article_page;
pub mod articles;
pub mod editor;
pub mod entity;
pub mod form;
pub mod home;
pub mod mvi;
pub mod profile;
pub mod selectors;
pub mod session;
pub mod status;
pub mod store;

pub use status::RequestStatus;
pub use store::{Action, RootReducer, RootState, Store};
