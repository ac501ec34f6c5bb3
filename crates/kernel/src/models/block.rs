//! Block model for placing content in page positions.
//!
//! The content store keeps blocks as loosely typed rows ([`BlockRecord`]).
//! They are converted once, at the boundary, into [`Block`], whose
//! [`BlockKind`] carries only the fields its presentation type uses.

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// Content-source sentinel selecting every published post.
pub const SOURCE_ALL: &str = "all";

/// Content-source sentinel selecting featured posts.
pub const SOURCE_FEATURED: &str = "featured";

/// Block row as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRecord {
    #[serde(deserialize_with = "super::null_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_default")]
    pub position: String,

    #[serde(rename = "type", deserialize_with = "super::null_default")]
    pub block_type: String,

    #[serde(alias = "order_index", deserialize_with = "super::null_default")]
    pub order: i32,

    #[serde(deserialize_with = "super::null_default")]
    pub item_count: i64,
    #[serde(deserialize_with = "super::null_default")]
    pub is_visible: bool,

    /// Category selector for content blocks, literal markup for `html` blocks.
    pub html_content: Option<String>,

    pub target_page: Option<String>,
}

/// Coarse placement of a block on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Main,
    Sidebar,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::Main, Position::Sidebar];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "main" => Some(Position::Main),
            "sidebar" => Some(Position::Sidebar),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Main => "main",
            Position::Sidebar => "sidebar",
        }
    }
}

/// The page currently being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    /// A single post's detail page.
    Detail,
    /// Any other public page (listings, documents, contact, ...).
    Other,
}

impl Page {
    /// Map a route name to the page kind; unknown routes are [`Page::Other`].
    pub fn from_route(route: &str) -> Self {
        match route.trim() {
            "home" | "" => Page::Home,
            "detail" | "news-detail" => Page::Detail,
            _ => Page::Other,
        }
    }
}

/// Pages a block may appear on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPage {
    #[default]
    All,
    Home,
    Detail,
}

impl TargetPage {
    /// Parse a stored scope. Missing or empty means every page.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Some(TargetPage::All),
            Some("home") => Some(TargetPage::Home),
            Some("detail") => Some(TargetPage::Detail),
            Some(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetPage::All => "all",
            TargetPage::Home => "home",
            TargetPage::Detail => "detail",
        }
    }

    /// Whether a block with this scope belongs on `page`.
    pub fn includes(self, page: Page) -> bool {
        match self {
            TargetPage::All => true,
            TargetPage::Home => page == Page::Home,
            TargetPage::Detail => page == Page::Detail,
        }
    }
}

/// Which posts a content block draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentSource {
    #[default]
    All,
    Featured,
    Category(String),
}

impl ContentSource {
    /// Parse the stored selector. Empty means [`ContentSource::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(SOURCE_ALL) => ContentSource::All,
            Some(SOURCE_FEATURED) => ContentSource::Featured,
            Some(slug) => ContentSource::Category(slug.to_string()),
        }
    }

    /// The stored selector string.
    pub fn as_selector(&self) -> &str {
        match self {
            ContentSource::All => SOURCE_ALL,
            ContentSource::Featured => SOURCE_FEATURED,
            ContentSource::Category(slug) => slug,
        }
    }
}

impl From<String> for ContentSource {
    fn from(raw: String) -> Self {
        ContentSource::parse(Some(&raw))
    }
}

impl From<ContentSource> for String {
    fn from(source: ContentSource) -> Self {
        source.as_selector().to_string()
    }
}

/// Presentation type tag, as stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Hero,
    Grid,
    List,
    Highlight,
    Docs,
    DocCats,
    Video,
    Html,
    Stats,
    Calendar,
    StaffList,
}

impl BlockType {
    pub fn parse(raw: &str) -> Option<Self> {
        let block_type = match raw.trim() {
            "hero" => BlockType::Hero,
            "grid" => BlockType::Grid,
            "list" => BlockType::List,
            "highlight" => BlockType::Highlight,
            "docs" => BlockType::Docs,
            "doc_cats" => BlockType::DocCats,
            "video" => BlockType::Video,
            "html" => BlockType::Html,
            "stats" => BlockType::Stats,
            "calendar" => BlockType::Calendar,
            "staff_list" => BlockType::StaffList,
            _ => return None,
        };
        Some(block_type)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Grid => "grid",
            BlockType::List => "list",
            BlockType::Highlight => "highlight",
            BlockType::Docs => "docs",
            BlockType::DocCats => "doc_cats",
            BlockType::Video => "video",
            BlockType::Html => "html",
            BlockType::Stats => "stats",
            BlockType::Calendar => "calendar",
            BlockType::StaffList => "staff_list",
        }
    }

    /// Content types draw posts through the selector and are suppressed when empty.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            BlockType::Hero | BlockType::Grid | BlockType::List | BlockType::Highlight
        )
    }
}

/// Presentation kind with the configuration each kind uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Hero { source: ContentSource },
    Grid { source: ContentSource },
    List { source: ContentSource },
    Highlight { source: ContentSource },
    Docs,
    DocCats,
    Video,
    Html { markup: String },
    Stats,
    Calendar,
    StaffList,
}

impl BlockKind {
    /// Build a kind from its tag and the overloaded content column.
    pub fn from_parts(block_type: BlockType, content: Option<&str>) -> Self {
        match block_type {
            BlockType::Hero => BlockKind::Hero {
                source: ContentSource::parse(content),
            },
            BlockType::Grid => BlockKind::Grid {
                source: ContentSource::parse(content),
            },
            BlockType::List => BlockKind::List {
                source: ContentSource::parse(content),
            },
            BlockType::Highlight => BlockKind::Highlight {
                source: ContentSource::parse(content),
            },
            BlockType::Docs => BlockKind::Docs,
            BlockType::DocCats => BlockKind::DocCats,
            BlockType::Video => BlockKind::Video,
            BlockType::Html => BlockKind::Html {
                markup: content.unwrap_or_default().to_string(),
            },
            BlockType::Stats => BlockKind::Stats,
            BlockType::Calendar => BlockKind::Calendar,
            BlockType::StaffList => BlockKind::StaffList,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Hero { .. } => BlockType::Hero,
            BlockKind::Grid { .. } => BlockType::Grid,
            BlockKind::List { .. } => BlockType::List,
            BlockKind::Highlight { .. } => BlockType::Highlight,
            BlockKind::Docs => BlockType::Docs,
            BlockKind::DocCats => BlockType::DocCats,
            BlockKind::Video => BlockType::Video,
            BlockKind::Html { .. } => BlockType::Html,
            BlockKind::Stats => BlockType::Stats,
            BlockKind::Calendar => BlockType::Calendar,
            BlockKind::StaffList => BlockType::StaffList,
        }
    }

    /// The content source, for content kinds only.
    pub fn source(&self) -> Option<&ContentSource> {
        match self {
            BlockKind::Hero { source }
            | BlockKind::Grid { source }
            | BlockKind::List { source }
            | BlockKind::Highlight { source } => Some(source),
            _ => None,
        }
    }

    fn source_mut(&mut self) -> Option<&mut ContentSource> {
        match self {
            BlockKind::Hero { source }
            | BlockKind::Grid { source }
            | BlockKind::List { source }
            | BlockKind::Highlight { source } => Some(source),
            _ => None,
        }
    }

    /// Value written back to the overloaded content column.
    fn stored_content(&self) -> Option<String> {
        match self {
            BlockKind::Html { markup } => Some(markup.clone()),
            other => other.source().map(|s| s.as_selector().to_string()),
        }
    }
}

/// A validated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub kind: BlockKind,

    /// Sort order, meaningful only among blocks sharing a position.
    pub order: i32,

    pub item_count: usize,
    pub is_visible: bool,
    pub target_page: TargetPage,
}

impl Block {
    /// Replace the content source of a content block.
    ///
    /// Returns `false` (and changes nothing) for kinds without a source.
    pub fn set_source(&mut self, source: ContentSource) -> bool {
        match self.kind.source_mut() {
            Some(current) => {
                *current = source;
                true
            }
            None => false,
        }
    }
}

impl TryFrom<BlockRecord> for Block {
    type Error = BlockError;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        let block_type =
            BlockType::parse(&record.block_type).ok_or_else(|| BlockError::UnknownType {
                id: record.id.clone(),
                value: record.block_type.clone(),
            })?;
        let position =
            Position::parse(&record.position).ok_or_else(|| BlockError::UnknownPosition {
                id: record.id.clone(),
                value: record.position.clone(),
            })?;
        let target_page = TargetPage::parse(record.target_page.as_deref()).ok_or_else(|| {
            BlockError::UnknownTargetPage {
                id: record.id.clone(),
                value: record.target_page.clone().unwrap_or_default(),
            }
        })?;

        Ok(Block {
            kind: BlockKind::from_parts(block_type, record.html_content.as_deref()),
            item_count: usize::try_from(record.item_count).unwrap_or(0),
            id: record.id,
            name: record.name,
            position,
            order: record.order,
            is_visible: record.is_visible,
            target_page,
        })
    }
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        BlockRecord {
            html_content: block.kind.stored_content(),
            block_type: block.kind.block_type().as_str().to_string(),
            id: block.id,
            name: block.name,
            position: block.position.as_str().to_string(),
            order: block.order,
            item_count: i64::try_from(block.item_count).unwrap_or(i64::MAX),
            is_visible: block.is_visible,
            target_page: Some(block.target_page.as_str().to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn record(block_type: &str, content: Option<&str>) -> BlockRecord {
        BlockRecord {
            id: "b1".into(),
            name: "Latest news".into(),
            position: "main".into(),
            block_type: block_type.into(),
            order: 1,
            item_count: 4,
            is_visible: true,
            html_content: content.map(String::from),
            target_page: None,
        }
    }

    #[test]
    fn content_source_sentinels() {
        assert_eq!(ContentSource::parse(None), ContentSource::All);
        assert_eq!(ContentSource::parse(Some("")), ContentSource::All);
        assert_eq!(ContentSource::parse(Some("all")), ContentSource::All);
        assert_eq!(ContentSource::parse(Some("featured")), ContentSource::Featured);
        assert_eq!(
            ContentSource::parse(Some("activity")),
            ContentSource::Category("activity".into())
        );
    }

    #[test]
    fn html_block_keeps_markup() {
        let block = Block::try_from(record("html", Some("<p>Hotline</p>"))).unwrap();
        assert_eq!(
            block.kind,
            BlockKind::Html {
                markup: "<p>Hotline</p>".into()
            }
        );
        assert!(block.kind.source().is_none());
    }

    #[test]
    fn grid_block_reads_selector() {
        let block = Block::try_from(record("grid", Some("news"))).unwrap();
        assert_eq!(
            block.kind.source(),
            Some(&ContentSource::Category("news".into()))
        );
        assert_eq!(block.target_page, TargetPage::All);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Block::try_from(record("carousel", None)).unwrap_err();
        assert!(matches!(err, BlockError::UnknownType { .. }));
    }

    #[test]
    fn unknown_position_is_rejected() {
        let mut rec = record("grid", None);
        rec.position = "footer".into();
        let err = Block::try_from(rec).unwrap_err();
        assert!(matches!(err, BlockError::UnknownPosition { .. }));
    }

    #[test]
    fn negative_item_count_clamps_to_zero() {
        let mut rec = record("docs", None);
        rec.item_count = -3;
        assert_eq!(Block::try_from(rec).unwrap().item_count, 0);
    }

    #[test]
    fn record_round_trip_preserves_overloaded_column() {
        let rec = record("highlight", Some("featured"));
        let block = Block::try_from(rec.clone()).unwrap();
        let back = BlockRecord::from(block);
        assert_eq!(back.html_content.as_deref(), Some("featured"));
        assert_eq!(back.block_type, "highlight");
        assert_eq!(back.target_page.as_deref(), Some("all"));
    }

    #[test]
    fn set_source_only_on_content_kinds() {
        let mut grid = Block::try_from(record("grid", None)).unwrap();
        assert!(grid.set_source(ContentSource::Featured));
        assert_eq!(grid.kind.source(), Some(&ContentSource::Featured));

        let mut stats = Block::try_from(record("stats", None)).unwrap();
        assert!(!stats.set_source(ContentSource::Featured));
    }

    #[test]
    fn target_page_scopes() {
        assert!(TargetPage::All.includes(Page::Other));
        assert!(TargetPage::Home.includes(Page::Home));
        assert!(!TargetPage::Home.includes(Page::Detail));
        assert!(TargetPage::Detail.includes(Page::Detail));
        assert!(!TargetPage::Detail.includes(Page::Home));
        assert_eq!(TargetPage::parse(Some("everywhere")), None);
    }

    #[test]
    fn page_from_route() {
        assert_eq!(Page::from_route("home"), Page::Home);
        assert_eq!(Page::from_route("news-detail"), Page::Detail);
        assert_eq!(Page::from_route("documents"), Page::Other);
    }
}
