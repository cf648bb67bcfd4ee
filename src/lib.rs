//! Client-side state core for a RealWorld ("Conduit") blogging backend.
//!
//! The crate is organised the way data flows through it:
//!
//! ```text
//! view ──→ actions (Conduit) ──→ api (ApiClient) ──→ REST backend
//!   ↑                │
//!   │                └──→ state::Store ──→ reducers ──→ RootState
//!   └────────────── selectors ←──────────────────────────────┘
//! ```

pub mod actions;
pub mod api;
pub mod config;
pub mod guard;
pub mod logging;
pub mod model;
pub mod state;
pub mod storage;

pub use actions::Conduit;
