mod intent;
mod reducer;
mod state;

pub use intent::ArticlesIntent;
pub use reducer::ArticlesReducer;
pub use state::ArticlesState;
