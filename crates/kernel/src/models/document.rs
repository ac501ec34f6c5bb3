//! Official documents and their categories.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::parse_loose_datetime;

/// A published document (decision, circular, form, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,

    /// Reference number printed on the document.
    #[serde(deserialize_with = "super::null_default")]
    pub number: String,

    #[serde(deserialize_with = "super::null_default")]
    pub title: String,

    /// Issue date as stored.
    #[serde(deserialize_with = "super::null_default")]
    pub date: String,

    pub category_id: Option<String>,

    /// File reference used for preview and download.
    #[serde(alias = "downloadUrl", deserialize_with = "super::null_default")]
    pub download_url: String,
}

impl Document {
    /// Parsed issue date, `None` when absent or unparsable.
    pub fn issued_at(&self) -> Option<NaiveDateTime> {
        parse_loose_datetime(&self.date)
    }

    /// Whether the file reference can be previewed inline.
    ///
    /// Placeholder references (`""`, `"#"`) have nothing to preview.
    pub fn has_file(&self) -> bool {
        let url = self.download_url.trim();
        !url.is_empty() && url != "#"
    }
}

/// A document category, listed by the document-category block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentCategory {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_default")]
    pub slug: String,
    pub description: Option<String>,

    #[serde(alias = "order_index", deserialize_with = "super::null_default")]
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_file_reference() {
        let mut doc = Document {
            download_url: "#".into(),
            ..Default::default()
        };
        assert!(!doc.has_file());

        doc.download_url = "https://files.example.edu/qd-12.pdf".into();
        assert!(doc.has_file());
    }
}
