//! Root state, action routing and the shared store handle.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::state::article_page::{ArticlePageIntent, ArticlePageReducer, ArticlePageState};
use crate::state::articles::{ArticlesIntent, ArticlesReducer, ArticlesState};
use crate::state::editor::{EditorIntent, EditorReducer, EditorState};
use crate::state::form::{FormIntent, FormReducer, FormState};
use crate::state::home::{HomeIntent, HomeReducer, HomeState};
use crate::state::mvi::{Intent, Reducer, SliceState};
use crate::state::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::state::session::{SessionIntent, SessionReducer, SessionState};

/// Every slice the client keeps, in one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub session: SessionState,
    pub home: HomeState,
    pub articles: ArticlesState,
    pub article_page: ArticlePageState,
    pub editor: EditorState,
    pub profile: ProfileState,
    pub sign_in: FormState,
    pub sign_up: FormState,
    pub settings: FormState,
}

impl SliceState for RootState {}

/// An intent addressed to one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Session(SessionIntent),
    Home(HomeIntent),
    Articles(ArticlesIntent),
    ArticlePage(ArticlePageIntent),
    Editor(EditorIntent),
    Profile(ProfileIntent),
    SignIn(FormIntent),
    SignUp(FormIntent),
    Settings(FormIntent),
}

impl Intent for Action {}

macro_rules! action_from {
    ($intent:ty => $variant:ident) => {
        impl From<$intent> for Action {
            fn from(intent: $intent) -> Self {
                Action::$variant(intent)
            }
        }
    };
}

action_from!(SessionIntent => Session);
action_from!(HomeIntent => Home);
action_from!(ArticlesIntent => Articles);
action_from!(ArticlePageIntent => ArticlePage);
action_from!(EditorIntent => Editor);
action_from!(ProfileIntent => Profile);

pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = Action;

    fn reduce(mut state: Self::State, action: Self::Intent) -> Self::State {
        match action {
            Action::Session(intent) => {
                state.session = SessionReducer::reduce(state.session, intent);
                let authenticated = state.session.is_authenticated;
                state.home =
                    HomeReducer::reduce(state.home, HomeIntent::AuthChanged(authenticated));
            }
            Action::Home(intent) => {
                let reset = matches!(intent, HomeIntent::Reset);
                state.home = HomeReducer::reduce(state.home, intent);
                if reset {
                    let authenticated = state.session.is_authenticated;
                    state.home =
                        HomeReducer::reduce(state.home, HomeIntent::AuthChanged(authenticated));
                }
            }
            Action::Articles(intent) => {
                state.articles = ArticlesReducer::reduce(state.articles, intent);
            }
            Action::ArticlePage(intent) => {
                state.article_page = ArticlePageReducer::reduce(state.article_page, intent);
            }
            Action::Editor(intent) => {
                state.editor = EditorReducer::reduce(state.editor, intent);
            }
            Action::Profile(intent) => {
                state.profile = ProfileReducer::reduce(state.profile, intent);
            }
            Action::SignIn(intent) => {
                state.sign_in = FormReducer::reduce(state.sign_in, intent);
            }
            Action::SignUp(intent) => {
                state.sign_up = FormReducer::reduce(state.sign_up, intent);
            }
            Action::Settings(intent) => {
                state.settings = FormReducer::reduce(state.settings, intent);
            }
        }
        state
    }
}

/// Shared handle to the root state.
///
/// Reducers run under a short lock that is never held across an await,
/// so concurrent orchestrators interleave only between whole actions.
/// Subscribers get a revision bump after every dispatch.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<RootState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(Mutex::new(state)),
            revision: Arc::new(revision),
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        {
            let mut guard = self.state.lock();
            let current = std::mem::take(&mut *guard);
            *guard = RootReducer::reduce(current, action);
        }
        self.revision.send_modify(|r| *r += 1);
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> RootState {
        self.state.lock().clone()
    }

    /// Run a selector against the current state without cloning it.
    pub fn select<R>(&self, selector: impl FnOnce(&RootState) -> R) -> R {
        selector(&self.state.lock())
    }

    /// Receiver that changes after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::home::YOUR_FEED;

    #[test]
    fn dispatch_bumps_revision() {
        let store = Store::new();
        assert_eq!(store.revision(), 0);
        store.dispatch(HomeIntent::TagsPending);
        store.dispatch(HomeIntent::TagsLoaded(vec!["a".into()]));
        assert_eq!(store.revision(), 2);
        assert_eq!(store.select(|s| s.home.tags.clone()), vec!["a".to_string()]);
    }

    #[test]
    fn home_reset_keeps_your_feed_for_logged_in_user() {
        let mut state = RootState::default();
        state.session.is_authenticated = true;
        let state = RootReducer::reduce(state, Action::Home(HomeIntent::Reset));
        let your_feed = state.home.tabs.iter().find(|t| t.title == YOUR_FEED).unwrap();
        assert!(!your_feed.hidden);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.dispatch(SessionIntent::BootWithoutToken);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
    }
}
