//! Video library model.

use serde::{Deserialize, Serialize};

/// A hosted video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_default")]
    pub title: String,

    /// Source identifier on the hosting service (e.g. a YouTube id).
    #[serde(alias = "youtube_id", deserialize_with = "super::null_default")]
    pub source_id: String,

    #[serde(deserialize_with = "super::null_default")]
    pub thumbnail: String,

    #[serde(alias = "isVisible", deserialize_with = "super::null_default")]
    pub is_visible: bool,

    #[serde(alias = "order_index", deserialize_with = "super::null_default")]
    pub order: i32,
}

impl Video {
    /// Embeddable player URL.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.source_id)
    }
}
