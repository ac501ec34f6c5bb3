//! Staff directory model.

use serde::{Deserialize, Serialize};

/// A staff member shown by the staff listing block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffMember {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,

    #[serde(alias = "fullName", deserialize_with = "super::null_default")]
    pub full_name: String,

    /// Job title.
    #[serde(alias = "position", deserialize_with = "super::null_default")]
    pub title: String,

    /// Party membership date, when recorded.
    #[serde(alias = "partyDate")]
    pub party_date: Option<String>,

    #[serde(deserialize_with = "super::null_default")]
    pub email: String,

    #[serde(alias = "avatarUrl", deserialize_with = "super::null_default")]
    pub avatar_url: String,

    #[serde(alias = "order_index", deserialize_with = "super::null_default")]
    pub order: i32,
}
