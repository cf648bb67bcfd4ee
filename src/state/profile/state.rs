use crate::model::Profile;
use crate::state::mvi::SliceState;
use crate::state::status::RequestStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    /// Username the page was opened for.
    pub username: Option<String>,
    pub profile: Option<Profile>,
    pub status: RequestStatus,
    pub follow_status: RequestStatus,
    pub error: Option<String>,
}

impl SliceState for ProfileState {}

impl ProfileState {
    /// Whether `username` is the profile the page was opened for.
    pub fn is_current(&self, username: &str) -> bool {
        self.username.as_deref() == Some(username)
    }
}
