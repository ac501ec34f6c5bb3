//! Content models.
//!
//! Every record mirrors the row shape of the hosted content store. Optional
//! columns default instead of failing deserialization.

pub mod block;
pub mod category;
pub mod document;
pub mod post;
pub mod site_config;
pub mod snapshot;
pub mod staff;
pub mod video;

pub use block::{Block, BlockKind, BlockRecord, BlockType, ContentSource, Page, Position, TargetPage};
pub use category::Category;
pub use document::{Document, DocumentCategory};
pub use post::{CategoryRef, Post, PostStatus};
pub use site_config::{SiteConfig, VisitorStats};
pub use snapshot::ContentSnapshot;
pub use staff::StaffMember;
pub use video::Video;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Deserialize a column that the store may return as `null`.
///
/// `#[serde(default)]` only covers absent fields; this maps an explicit
/// `null` to the type's default as well.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse a stored date leniently.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// and plain `YYYY-MM-DD`. Anything else yields `None`.
pub(crate) fn parse_loose_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
