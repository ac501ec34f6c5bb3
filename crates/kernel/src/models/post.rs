//! Post model: news articles and announcements shown in content blocks.
//!
//! Posts are owned by the content repository; the kernel only reads them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::parse_loose_datetime;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    /// Any status string the repository stores that this kernel doesn't know.
    #[serde(other)]
    Unknown,
}

/// Raw category reference as stored on a post.
///
/// The repository has stored this column as a single slug, as a JSON-encoded
/// list of slugs inside a string, and as a real list. Normalize it with
/// [`crate::content::resolve_categories`] before use.
///
/// Deserialization never fails: numbers become text, non-scalar list
/// elements are dropped and anything else is [`CategoryRef::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryRef {
    #[default]
    Absent,
    List(Vec<String>),
    Text(String),
}

impl<'de> Deserialize<'de> for CategoryRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde_json::Value;

        fn scalar(value: Value) -> Option<String> {
            match value {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }
        }

        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => CategoryRef::List(items.into_iter().filter_map(scalar).collect()),
            Value::Bool(_) | Value::Null | Value::Object(_) => CategoryRef::Absent,
            other => scalar(other).map_or(CategoryRef::Absent, CategoryRef::Text),
        })
    }
}

impl From<&str> for CategoryRef {
    fn from(value: &str) -> Self {
        CategoryRef::Text(value.to_string())
    }
}

impl From<Vec<String>> for CategoryRef {
    fn from(value: Vec<String>) -> Self {
        CategoryRef::List(value)
    }
}

/// Post record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_default")]
    pub slug: String,
    #[serde(deserialize_with = "super::null_default")]
    pub summary: String,

    /// Rich-text body.
    #[serde(alias = "content", deserialize_with = "super::null_default")]
    pub body: String,

    /// Thumbnail image URI.
    #[serde(deserialize_with = "super::null_default")]
    pub thumbnail: String,

    #[serde(deserialize_with = "super::null_default")]
    pub author: String,

    /// Publication date as stored (`YYYY-MM-DD` or RFC 3339).
    #[serde(deserialize_with = "super::null_default")]
    pub date: String,

    #[serde(deserialize_with = "super::null_default")]
    pub status: PostStatus,

    /// Unnormalized category reference.
    pub category: CategoryRef,

    #[serde(alias = "views", deserialize_with = "super::null_default")]
    pub view_count: u64,

    #[serde(alias = "isFeatured", deserialize_with = "super::null_default")]
    pub is_featured: bool,

    #[serde(alias = "showOnHome", deserialize_with = "super::null_default")]
    pub show_on_home: bool,
}

impl Post {
    /// Whether this post may appear in any public block.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Parsed publication date, `None` when absent or unparsable.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_loose_datetime(&self.date)
    }
}
