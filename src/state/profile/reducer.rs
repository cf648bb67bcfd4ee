use crate::state::mvi::Reducer;
use crate::state::profile::intent::ProfileIntent;
use crate::state::profile::state::ProfileState;
use crate::state::status::RequestStatus;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Pending { username } => {
                if !state.is_current(&username) {
                    state.profile = None;
                }
                state.username = Some(username);
                state.status = RequestStatus::Loading;
            }
            ProfileIntent::Loaded(profile) if state.is_current(&profile.username) => {
                state.profile = Some(profile);
                state.status = RequestStatus::Succeeded;
                state.error = None;
            }
            ProfileIntent::Failed { username, message } if state.is_current(&username) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
            ProfileIntent::FollowPending { username } if state.is_current(&username) => {
                state.follow_status = RequestStatus::Loading;
            }
            ProfileIntent::FollowChanged(profile) if state.is_current(&profile.username) => {
                state.follow_status = RequestStatus::Succeeded;
                state.profile = Some(profile);
            }
            ProfileIntent::FollowFailed { username, message } if state.is_current(&username) => {
                state.follow_status = RequestStatus::Failed;
                state.error = Some(message);
            }
            ProfileIntent::Reset => return ProfileState::default(),

            // Result for a profile that is no longer on screen.
            _ => {}
        }
        state
    }
}
