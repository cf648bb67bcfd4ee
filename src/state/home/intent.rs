use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    TagsPending,
    TagsLoaded(Vec<String>),
    TagsFailed(String),
    /// User picked a tab by title. Hidden or unknown titles are ignored.
    SelectTab(String),
    /// User clicked a tag; it becomes the selected custom tab.
    SelectTag(String),
    /// Session gained or lost its user.
    AuthChanged(bool),
    Reset,
}

impl Intent for HomeIntent {}
