use crate::actions::{report, Conduit};
use crate::state::home::HomeIntent;
use crate::state::RequestStatus;

impl Conduit {
    pub async fn fetch_tags(&self) -> RequestStatus {
        self.store.dispatch(HomeIntent::TagsPending);
        match self.api.tags().await {
            Ok(tags) => {
                self.store.dispatch(HomeIntent::TagsLoaded(tags));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store
                    .dispatch(HomeIntent::TagsFailed(report("fetch_tags", &e)));
                RequestStatus::Failed
            }
        }
    }

    /// Select a fixed tab (or the visible custom tab) and load its first page.
    pub async fn select_tab(&self, title: &str) -> RequestStatus {
        self.store.dispatch(HomeIntent::SelectTab(title.to_string()));
        self.load_home_feed(0).await
    }

    /// Show articles for `tag` in the custom tab.
    pub async fn select_tag(&self, tag: &str) -> RequestStatus {
        self.store.dispatch(HomeIntent::SelectTag(tag.to_string()));
        self.load_home_feed(0).await
    }
}
