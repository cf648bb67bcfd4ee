use crate::state::mvi::SliceState;
use crate::state::status::RequestStatus;

pub const YOUR_FEED: &str = "Your Feed";
pub const GLOBAL_FEED: &str = "Global Feed";
/// Title of the custom slot before any tag has been selected.
pub const CUSTOM_TAB_PLACEHOLDER: &str = "Custom Tab";

/// One entry of the home feed tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: String,
    pub hidden: bool,
    /// Tag-derived slot. Exactly one exists and it is reused for every tag.
    pub custom: bool,
}

impl Tab {
    fn fixed(title: &str, hidden: bool) -> Self {
        Self {
            title: title.to_string(),
            hidden,
            custom: false,
        }
    }
}

/// Which listing the selected tab stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// `GET /articles/feed`
    Personal,
    /// `GET /articles`
    Global,
    /// `GET /articles?tag=..`
    Tag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub tags: Vec<String>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub tabs: Vec<Tab>,
    /// Index into `tabs`.
    pub selected: usize,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            status: RequestStatus::Idle,
            error: None,
            tabs: vec![
                Tab::fixed(YOUR_FEED, true),
                Tab::fixed(GLOBAL_FEED, false),
                Tab {
                    title: CUSTOM_TAB_PLACEHOLDER.to_string(),
                    hidden: true,
                    custom: true,
                },
            ],
            selected: 1,
        }
    }
}

impl SliceState for HomeState {}

impl HomeState {
    pub fn selected_tab(&self) -> &Tab {
        &self.tabs[self.selected]
    }

    pub fn visible_tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter().filter(|t| !t.hidden)
    }

    pub fn custom_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.custom)
    }

    pub(crate) fn custom_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.custom)
    }

    pub(crate) fn fixed_index(&self, title: &str) -> Option<usize> {
        self.tabs.iter().position(|t| !t.custom && t.title == title)
    }

    /// Fixed tabs win over the custom slot when titles collide.
    pub(crate) fn index_of(&self, title: &str) -> Option<usize> {
        self.fixed_index(title)
            .or_else(|| self.tabs.iter().position(|t| t.custom && t.title == title))
    }

    pub fn feed_source(&self) -> FeedSource {
        let tab = self.selected_tab();
        if tab.custom {
            FeedSource::Tag(tab.title.clone())
        } else if tab.title == YOUR_FEED {
            FeedSource::Personal
        } else {
            FeedSource::Global
        }
    }
}
