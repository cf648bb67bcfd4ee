//! Article editor: prefill for editing and the result of the last save.

use crate::model::{Article, ArticleDraft};
use crate::state::mvi::{Intent, Reducer, SliceState};
use crate::state::status::RequestStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    /// Slug being edited; `None` for a new article.
    pub slug: Option<String>,
    /// Prefilled fields when editing an existing article.
    pub draft: ArticleDraft,
    /// Status of loading the article being edited.
    pub load_status: RequestStatus,
    /// Status of the last create or update.
    pub status: RequestStatus,
    pub error: Option<String>,
    /// The article as the backend stored it after the last save.
    pub last_saved: Option<Article>,
}

impl SliceState for EditorState {}

impl EditorState {
    pub fn is_editing(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }
}

#[derive(Debug, Clone)]
pub enum EditorIntent {
    LoadPending { slug: String },
    Loaded(Article),
    LoadFailed { slug: String, message: String },
    SavePending,
    Saved(Article),
    SaveFailed(String),
    Reset,
}

impl Intent for EditorIntent {}

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::LoadPending { slug } => {
                return EditorState {
                    slug: Some(slug),
                    load_status: RequestStatus::Loading,
                    ..Default::default()
                };
            }
            EditorIntent::Loaded(article) if state.is_editing(&article.slug) => {
                state.draft = ArticleDraft::from_article(&article);
                state.load_status = RequestStatus::Succeeded;
            }
            EditorIntent::LoadFailed { slug, message } if state.is_editing(&slug) => {
                state.load_status = RequestStatus::Failed;
                state.error = Some(message);
            }
            EditorIntent::SavePending => {
                state.status = RequestStatus::Loading;
            }
            EditorIntent::Saved(article) => {
                state.status = RequestStatus::Succeeded;
                state.error = None;
                state.draft = ArticleDraft::from_article(&article);
                state.slug = Some(article.slug.clone());
                state.last_saved = Some(article);
            }
            EditorIntent::SaveFailed(message) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
            EditorIntent::Reset => return EditorState::default(),

            // Load result for an article the editor no longer shows.
            EditorIntent::Loaded(_) | EditorIntent::LoadFailed { .. } => {}
        }
        state
    }
}
