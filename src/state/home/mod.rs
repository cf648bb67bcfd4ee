mod intent;
mod reducer;
mod state;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{FeedSource, HomeState, Tab, CUSTOM_TAB_PLACEHOLDER, GLOBAL_FEED, YOUR_FEED};
