//! Site-wide configuration consumed by the page composer.

use serde::{Deserialize, Serialize};

/// Global site settings.
///
/// Only the three display toggles influence composition; the remaining
/// fields are carried through for the page shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// School name.
    #[serde(deserialize_with = "super::null_default")]
    pub name: String,

    #[serde(deserialize_with = "super::null_default")]
    pub slogan: String,

    /// Whether hero blocks are shown at all.
    #[serde(alias = "show_welcome_banner", alias = "showWelcomeBanner", deserialize_with = "super::null_default")]
    pub show_hero: bool,

    /// Whether list and highlight blocks are shown in the main stream.
    #[serde(alias = "home_show_program", alias = "homeShowProgram", deserialize_with = "super::null_default")]
    pub show_program: bool,

    /// Item cap for grid blocks; zero or negative disables the override.
    #[serde(alias = "home_news_count", alias = "homeNewsCount", deserialize_with = "super::null_default")]
    pub grid_item_cap: i64,
}

impl SiteConfig {
    /// The grid override, if one is in effect.
    pub fn grid_cap(&self) -> Option<usize> {
        usize::try_from(self.grid_item_cap).ok().filter(|cap| *cap > 0)
    }
}

/// Visitor counters shown by the statistics block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorStats {
    #[serde(deserialize_with = "super::null_default")]
    pub online: u64,
    #[serde(deserialize_with = "super::null_default")]
    pub today: u64,
    #[serde(deserialize_with = "super::null_default")]
    pub month: u64,
    #[serde(deserialize_with = "super::null_default")]
    pub total: u64,
}
