use crate::model::Profile;
use crate::state::mvi::Intent;

/// Results carry the username they were requested for; the reducer drops
/// them once the page shows someone else.
#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Pending { username: String },
    Loaded(Profile),
    Failed { username: String, message: String },
    FollowPending { username: String },
    /// Follow or unfollow round trip returned the updated profile.
    FollowChanged(Profile),
    FollowFailed { username: String, message: String },
    Reset,
}

impl Intent for ProfileIntent {}
