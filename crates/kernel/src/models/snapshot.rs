//! In-memory snapshot of every collection a render pass reads.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::{
    BlockRecord, Category, Document, DocumentCategory, Post, SiteConfig, StaffMember, Video,
    VisitorStats,
};

/// Collections as fetched from the content store at the start of a render pass.
///
/// The kernel never re-fetches or mutates a snapshot mid-render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSnapshot {
    #[serde(deserialize_with = "super::null_default")]
    pub posts: Vec<Post>,
    #[serde(deserialize_with = "super::null_default")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "super::null_default")]
    pub documents: Vec<Document>,
    #[serde(deserialize_with = "super::null_default")]
    pub document_categories: Vec<DocumentCategory>,
    #[serde(deserialize_with = "super::null_default")]
    pub staff: Vec<StaffMember>,
    #[serde(deserialize_with = "super::null_default")]
    pub videos: Vec<Video>,
    #[serde(deserialize_with = "super::null_default")]
    pub blocks: Vec<BlockRecord>,
    #[serde(deserialize_with = "super::null_default")]
    pub site: SiteConfig,
    #[serde(deserialize_with = "super::null_default")]
    pub visitors: VisitorStats,
}

impl ContentSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("invalid snapshot JSON")
    }

    /// Parse a snapshot from YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yml::from_str(content).context("invalid snapshot YAML")
    }

    /// Load a snapshot file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => bail!(
                "unsupported snapshot format for {} (expected .json, .yaml or .yml)",
                path.display()
            ),
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot =
            parse(&content).with_context(|| format!("failed to parse snapshot {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            posts = snapshot.posts.len(),
            blocks = snapshot.blocks.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }
}
