use crate::model::User;
use crate::state::mvi::SliceState;
use crate::state::status::RequestStatus;

/// Process-wide session. Starts `Idle` until boot decides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: RequestStatus,
    pub is_authenticated: bool,
    pub error: Option<String>,
}

impl SliceState for SessionState {}

impl SessionState {
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
