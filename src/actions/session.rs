use tracing::{debug, info, warn};

use crate::actions::{report, Conduit};
use crate::model::{NewUser, UpdateUser, User};
use crate::state::editor::EditorIntent;
use crate::state::form::FormIntent;
use crate::state::profile::ProfileIntent;
use crate::state::session::SessionIntent;
use crate::state::{Action, RequestStatus};
use crate::storage::StorageError;

impl Conduit {
    /// Resolve the session at startup.
    ///
    /// Without a stored token the session settles as a guest and no
    /// request is made. With one, the token becomes the default
    /// credential and `GET /user` decides.
    pub async fn boot(&self) -> RequestStatus {
        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "could not read stored session token");
                None
            }
        };

        let Some(token) = token else {
            debug!("no stored token, starting as guest");
            self.store.dispatch(SessionIntent::BootWithoutToken);
            return RequestStatus::Succeeded;
        };

        self.api.set_token(Some(token));
        self.refresh_user().await
    }

    /// Re-query the user the current token belongs to.
    pub async fn refresh_user(&self) -> RequestStatus {
        self.store.dispatch(SessionIntent::Pending);
        match self.api.current_user().await {
            Ok(user) => match self.establish(user) {
                Ok(()) => RequestStatus::Succeeded,
                Err(e) => {
                    self.store
                        .dispatch(SessionIntent::Failed(report("refresh_user", &e)));
                    RequestStatus::Failed
                }
            },
            Err(e) => {
                // A rejected token must not ride along on guest requests.
                let signed_in = self.store.select(|s| s.session.is_authenticated);
                if e.is_unauthorized() && !signed_in {
                    self.api.set_token(None);
                }
                self.store
                    .dispatch(SessionIntent::Failed(report("refresh_user", &e)));
                RequestStatus::Failed
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> RequestStatus {
        self.store.dispatch(Action::SignIn(FormIntent::Submitted));
        let result = match self.api.login(email, password).await {
            Ok(user) => self.establish(user).map_err(|e| report("login", &e)),
            Err(e) => Err(report("login", &e)),
        };
        self.settle_form(Action::SignIn, result)
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> RequestStatus {
        self.store.dispatch(Action::SignUp(FormIntent::Submitted));
        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = match self.api.register(&new_user).await {
            Ok(user) => self.establish(user).map_err(|e| report("register", &e)),
            Err(e) => Err(report("register", &e)),
        };
        self.settle_form(Action::SignUp, result)
    }

    /// Update profile fields or the password of the current user.
    pub async fn update_user(&self, update: &UpdateUser) -> RequestStatus {
        self.store.dispatch(Action::Settings(FormIntent::Submitted));
        let result = match self.api.update_user(update).await {
            Ok(user) => self
                .establish(user)
                .map_err(|e| report("update_user", &e)),
            Err(e) => Err(report("update_user", &e)),
        };
        self.settle_form(Action::Settings, result)
    }

    /// End the session: drop the credential, the stored token and every
    /// per-user slice.
    pub fn logout(&self) {
        self.api.set_token(None);
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "could not clear stored session token");
        }
        self.store.dispatch(SessionIntent::LoggedOut);
        self.store.dispatch(ProfileIntent::Reset);
        self.store.dispatch(EditorIntent::Reset);
        self.store.dispatch(Action::SignIn(FormIntent::Reset));
        self.store.dispatch(Action::SignUp(FormIntent::Reset));
        self.store.dispatch(Action::Settings(FormIntent::Reset));
        info!("logged out");
    }

    /// Persist the token, then make it the default credential, then
    /// publish the user. Nothing changes if persisting fails.
    fn establish(&self, user: User) -> Result<(), StorageError> {
        self.tokens.save(&user.token)?;
        self.api.set_token(Some(user.token.clone()));
        info!(username = %user.username, "session established");
        self.store.dispatch(SessionIntent::LoggedIn(user));
        Ok(())
    }

    fn settle_form(
        &self,
        form: fn(FormIntent) -> Action,
        result: Result<(), String>,
    ) -> RequestStatus {
        match result {
            Ok(()) => {
                self.store.dispatch(form(FormIntent::Succeeded));
                RequestStatus::Succeeded
            }
            Err(message) => {
                self.store.dispatch(form(FormIntent::Failed(message)));
                RequestStatus::Failed
            }
        }
    }
}
