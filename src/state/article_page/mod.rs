mod intent;
mod reducer;
mod state;

pub use intent::ArticlePageIntent;
pub use reducer::ArticlePageReducer;
pub use state::ArticlePageState;
