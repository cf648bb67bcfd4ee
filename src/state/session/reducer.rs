use crate::state::mvi::Reducer;
use crate::state::session::intent::SessionIntent;
use crate::state::session::state::SessionState;
use crate::state::status::RequestStatus;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::BootWithoutToken | SessionIntent::LoggedOut => SessionState {
                status: RequestStatus::Succeeded,
                ..Default::default()
            },
            SessionIntent::Pending => SessionState {
                status: RequestStatus::Loading,
                ..state
            },
            SessionIntent::LoggedIn(user) => SessionState {
                user: Some(user),
                status: RequestStatus::Succeeded,
                is_authenticated: true,
                error: None,
            },
            // A failed refresh keeps an established session; a failed boot
            // leaves the user a guest.
            SessionIntent::Failed(message) if state.is_authenticated => SessionState {
                status: RequestStatus::Failed,
                error: Some(message),
                ..state
            },
            SessionIntent::Failed(message) => SessionState {
                user: None,
                status: RequestStatus::Failed,
                is_authenticated: false,
                error: Some(message),
            },
        }
    }
}
