use serde::{Deserialize, Serialize};

/// Public view of a user, embedded by value in articles and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only meaningful on the profile page.
    #[serde(default)]
    pub following: bool,
}
