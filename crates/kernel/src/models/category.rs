//! Post category model.

use serde::{Deserialize, Serialize};

/// A post category.
///
/// `slug` is the stable identifier posts and blocks refer to; it is unique
/// within the active category set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,

    /// Display name.
    #[serde(deserialize_with = "super::null_default")]
    pub name: String,

    #[serde(deserialize_with = "super::null_default")]
    pub slug: String,

    /// Presentation hint, e.g. `blue`, `red`, `emerald`.
    #[serde(deserialize_with = "super::null_default")]
    pub color: String,

    /// Sort order in category listings.
    #[serde(alias = "order_index", deserialize_with = "super::null_default")]
    pub order: i32,
}
