//! Submit status of the sign-in, sign-up and settings forms.
//!
//! Field drafts stay with the view; the store only tracks whether the
//! last submit is in flight, succeeded or failed.

use crate::state::mvi::{Intent, Reducer, SliceState};
use crate::state::status::RequestStatus;

/// Which form a failure message is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Auth,
    Other,
}

impl FormKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Auth => "Invalid email or password",
            FormKind::Other => "Something went wrong, please try again",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub status: RequestStatus,
    /// Raw message of the last failure, kept for logs and debugging.
    pub error: Option<String>,
}

impl SliceState for FormState {}

impl FormState {
    /// Fixed, generically worded message to render for a failed submit.
    pub fn display_error(&self, kind: FormKind) -> Option<&'static str> {
        self.status
            .is_failed()
            .then(|| kind.failure_message())
    }
}

#[derive(Debug, Clone)]
pub enum FormIntent {
    Submitted,
    Succeeded,
    Failed(String),
    Reset,
}

impl Intent for FormIntent {}

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Submitted => FormState {
                status: RequestStatus::Loading,
                error: state.error,
            },
            FormIntent::Succeeded => FormState {
                status: RequestStatus::Succeeded,
                error: None,
            },
            FormIntent::Failed(message) => FormState {
                status: RequestStatus::Failed,
                error: Some(message),
            },
            FormIntent::Reset => FormState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_auth_form_shows_generic_message() {
        let state = FormReducer::reduce(FormState::default(), FormIntent::Submitted);
        assert!(state.display_error(FormKind::Auth).is_none());
        let state = FormReducer::reduce(
            state,
            FormIntent::Failed("Request failed with status code 403".into()),
        );
        assert_eq!(
            state.display_error(FormKind::Auth),
            Some("Invalid email or password")
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Request failed with status code 403")
        );
    }

    #[test]
    fn success_clears_error() {
        let state = FormReducer::reduce(FormState::default(), FormIntent::Failed("x".into()));
        let state = FormReducer::reduce(state, FormIntent::Submitted);
        let state = FormReducer::reduce(state, FormIntent::Succeeded);
        assert_eq!(state.status, RequestStatus::Succeeded);
        assert!(state.error.is_none());
    }
}
