use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;

/// A comment on one article. Ids are unique per article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: Profile,
}
