use crate::model::Article;
use crate::state::entity::EntityStore;
use crate::state::mvi::SliceState;
use crate::state::status::RequestStatus;

/// The article list shown by the home feed and the profile tabs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticlesState {
    pub entities: EntityStore<Article>,
    /// Total matches server-side, for pagination.
    pub articles_count: u32,
    /// Status of the last list request.
    pub status: RequestStatus,
    pub error: Option<String>,
    /// Status of the last favorite or unfavorite round trip.
    pub favorite_status: RequestStatus,
    pub favorite_error: Option<String>,
}

impl SliceState for ArticlesState {}

impl ArticlesState {
    /// Number of pages of `page_size` needed to show every match.
    pub fn page_count(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        self.articles_count.div_ceil(page_size)
    }
}
