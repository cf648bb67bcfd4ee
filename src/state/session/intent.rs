use crate::model::User;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Boot found no stored token. Settles as a guest without a request.
    BootWithoutToken,
    /// A "who am I" request is in flight.
    Pending,
    LoggedIn(User),
    Failed(String),
    LoggedOut,
}

impl Intent for SessionIntent {}
