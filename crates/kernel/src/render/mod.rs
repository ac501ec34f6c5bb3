//! Block rendering: suppression rules and presentation dispatch.
//!
//! The renderer produces [`RenderedBlock`] descriptors. Turning them into
//! markup is the theme's job (see [`crate::theme`]).

mod block;
mod calendar;

pub use block::{BlockRenderer, RenderContext, RenderOutcome, Suppression};
pub use calendar::MonthGrid;

use serde::Serialize;

use crate::content::Badge;
use crate::models::{BlockType, Position, VisitorStats};

/// Empty-state text for a document listing with no documents.
pub const EMPTY_DOCUMENTS: &str = "No documents have been published yet.";

/// Empty-state text for a document-category listing with no categories.
pub const EMPTY_DOCUMENT_CATEGORIES: &str = "No document categories yet.";

/// Empty-state text for a staff listing with no members.
pub const EMPTY_STAFF: &str = "The staff list is being updated.";

/// A block that survived suppression, ready for the theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBlock {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub block_type: BlockType,
    pub body: BlockBody,
}

/// Per-kind layout data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum BlockBody {
    /// One large lead item plus up to two secondary items.
    Hero {
        lead: PostCard,
        secondary: Vec<PostCard>,
    },
    /// Uniform card grid.
    Grid { cards: Vec<PostCard> },
    /// One lead item followed by a list (list and highlight blocks).
    Feature { lead: PostCard, rest: Vec<PostCard> },
    Documents { rows: Vec<DocumentRow> },
    DocumentCategories { categories: Vec<DocumentCategoryLink> },
    Videos { videos: Vec<VideoEmbed> },
    Staff { members: Vec<StaffCard> },
    /// Admin-authored markup, inserted verbatim.
    Markup { html: String },
    Stats { stats: VisitorStats },
    Calendar { month: MonthGrid },
    /// A listing kind with nothing to list.
    Empty { message: String },
}

/// A post as shown inside a content block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub thumbnail: String,
    pub date: String,
    pub badges: Vec<Badge>,

    /// Badges left out for space (side stream shows at most two).
    pub hidden_badges: usize,
}

/// A document row with preview and download actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub id: String,
    pub number: String,
    pub title: String,
    pub date: String,
    pub download_url: String,

    /// Whether the file reference points at something previewable.
    pub has_file: bool,
}

/// Link to a document category's listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCategoryLink {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub id: String,
    pub title: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffCard {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub party_date: Option<String>,
    pub email: String,
    pub avatar_url: String,
}
