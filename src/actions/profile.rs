use tracing::warn;

use crate::actions::{report, Conduit};
use crate::state::profile::ProfileIntent;
use crate::state::RequestStatus;

impl Conduit {
    pub async fn fetch_profile(&self, username: &str) -> RequestStatus {
        self.store.dispatch(ProfileIntent::Pending {
            username: username.to_string(),
        });
        match self.api.profile(username).await {
            Ok(profile) => {
                self.store.dispatch(ProfileIntent::Loaded(profile));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store.dispatch(ProfileIntent::Failed {
                    username: username.to_string(),
                    message: report("fetch_profile", &e),
                });
                RequestStatus::Failed
            }
        }
    }

    /// Profile page entry: the profile and the user's own articles.
    pub async fn open_profile(&self, username: &str) -> RequestStatus {
        let (profile, _) = tokio::join!(
            self.fetch_profile(username),
            self.fetch_author_articles(username)
        );
        profile
    }

    pub async fn follow(&self, username: &str) -> RequestStatus {
        self.set_following(username, true).await
    }

    pub async fn unfollow(&self, username: &str) -> RequestStatus {
        self.set_following(username, false).await
    }

    /// Flip `following` on the profile currently shown, from its cached flag.
    pub async fn toggle_follow(&self) -> RequestStatus {
        let cached = self.store.select(|s| {
            s.profile
                .profile
                .as_ref()
                .map(|p| (p.username.clone(), p.following))
        });
        match cached {
            Some((username, true)) => self.unfollow(&username).await,
            Some((username, false)) => self.follow(&username).await,
            None => {
                warn!("toggle_follow without a loaded profile");
                RequestStatus::Failed
            }
        }
    }

    async fn set_following(&self, username: &str, follow: bool) -> RequestStatus {
        self.store.dispatch(ProfileIntent::FollowPending {
            username: username.to_string(),
        });
        let (operation, result) = if follow {
            ("follow", self.api.follow(username).await)
        } else {
            ("unfollow", self.api.unfollow(username).await)
        };
        match result {
            Ok(profile) => {
                self.store.dispatch(ProfileIntent::FollowChanged(profile));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store.dispatch(ProfileIntent::FollowFailed {
                    username: username.to_string(),
                    message: report(operation, &e),
                });
                RequestStatus::Failed
            }
        }
    }
}
