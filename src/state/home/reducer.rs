use crate::state::home::intent::HomeIntent;
use crate::state::home::state::{HomeState, GLOBAL_FEED, YOUR_FEED};
use crate::state::mvi::Reducer;
use crate::state::status::RequestStatus;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::TagsPending => {
                state.status = RequestStatus::Loading;
            }
            HomeIntent::TagsLoaded(tags) => {
                state.tags = tags;
                state.status = RequestStatus::Succeeded;
                state.error = None;
            }
            HomeIntent::TagsFailed(message) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
            HomeIntent::SelectTab(title) => {
                let Some(index) = state.index_of(&title) else {
                    return state;
                };
                if state.tabs[index].hidden {
                    return state;
                }
                if !state.tabs[index].custom {
                    if let Some(custom) = state.custom_index() {
                        state.tabs[custom].hidden = true;
                    }
                }
                state.selected = index;
            }
            HomeIntent::SelectTag(tag) => {
                if let Some(custom) = state.custom_index() {
                    state.tabs[custom].title = tag;
                    state.tabs[custom].hidden = false;
                    state.selected = custom;
                }
            }
            HomeIntent::AuthChanged(authenticated) => {
                let Some(your_feed) = state.fixed_index(YOUR_FEED) else {
                    return state;
                };
                state.tabs[your_feed].hidden = !authenticated;
                if !authenticated && state.selected == your_feed {
                    if let Some(global) = state.fixed_index(GLOBAL_FEED) {
                        state.selected = global;
                    }
                }
            }
            HomeIntent::Reset => return HomeState::default(),
        }
        state
    }
}
