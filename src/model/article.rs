use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u32,
    pub author: Profile,
}

/// Editable fields of an article, as sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleDraft {
    /// Split a comma-separated tag input into a tag list.
    ///
    /// Entries are trimmed, empty entries dropped and duplicates removed
    /// while keeping first-seen order.
    pub fn parse_tags(input: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Prefill a draft from an existing article for editing.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tag_list: article.tag_list.clone(),
        }
    }

    /// Render the tag list back into the comma-separated input form.
    pub fn tags_input(&self) -> String {
        self.tag_list.join(",")
    }
}
