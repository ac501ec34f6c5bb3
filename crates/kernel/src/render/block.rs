//! Per-block suppression and presentation dispatch.

use chrono::NaiveDate;

use crate::content::{
    CategoryIndex, effective_cap, select_document_categories, select_documents, select_posts,
    select_staff, select_videos,
};
use crate::models::{Block, BlockKind, ContentSnapshot, ContentSource, Page, Position, Post, VisitorStats};

use super::{
    BlockBody, DocumentCategoryLink, DocumentRow, EMPTY_DOCUMENT_CATEGORIES, EMPTY_DOCUMENTS,
    EMPTY_STAFF, MonthGrid, PostCard, RenderedBlock, StaffCard, VideoEmbed,
};

/// Maximum badges on a side-stream card before the rest collapse into a count.
const SIDEBAR_BADGE_LIMIT: usize = 2;

/// Secondary items beside a hero's lead item.
const HERO_SECONDARY_LIMIT: usize = 2;

/// Per-pass inputs that are not part of the content snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// The page being composed.
    pub page: Page,

    /// Date used by the calendar block.
    pub today: NaiveDate,

    /// Visitor counters read once at the start of the pass.
    pub visitors: VisitorStats,
}

/// Why a block was left out of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// The block's target-page scope excludes the page being composed.
    OtherPage,
    /// Hero blocks are switched off in site configuration.
    HeroHidden,
    /// List/highlight blocks in the main stream are switched off.
    ProgramHidden,
    /// A content or video block found nothing to show.
    NoItems,
}

/// Result of rendering one block.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(RenderedBlock),
    Suppressed(Suppression),
}

impl RenderOutcome {
    pub fn into_rendered(self) -> Option<RenderedBlock> {
        match self {
            RenderOutcome::Rendered(block) => Some(block),
            RenderOutcome::Suppressed(_) => None,
        }
    }
}

/// Renders blocks against one content snapshot.
pub struct BlockRenderer<'a> {
    snapshot: &'a ContentSnapshot,
    categories: CategoryIndex<'a>,
    context: RenderContext,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(snapshot: &'a ContentSnapshot, context: RenderContext) -> Self {
        Self {
            snapshot,
            categories: CategoryIndex::new(&snapshot.categories),
            context,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Suppression rules that need no content lookup.
    pub fn gate(&self, block: &Block) -> Option<Suppression> {
        let site = &self.snapshot.site;

        if !block.target_page.includes(self.context.page) {
            return Some(Suppression::OtherPage);
        }

        match block.kind {
            BlockKind::Hero { .. } if !site.show_hero => Some(Suppression::HeroHidden),
            BlockKind::List { .. } | BlockKind::Highlight { .. }
                if block.position == Position::Main && !site.show_program =>
            {
                Some(Suppression::ProgramHidden)
            }
            _ => None,
        }
    }

    /// Render one block, or report why it was suppressed.
    pub fn render(&self, block: &Block) -> RenderOutcome {
        if let Some(reason) = self.gate(block) {
            tracing::debug!(block = %block.id, ?reason, "block suppressed");
            return RenderOutcome::Suppressed(reason);
        }

        let Some(body) = self.body(block) else {
            tracing::debug!(block = %block.id, reason = ?Suppression::NoItems, "block suppressed");
            return RenderOutcome::Suppressed(Suppression::NoItems);
        };

        RenderOutcome::Rendered(RenderedBlock {
            id: block.id.clone(),
            name: block.name.clone(),
            position: block.position,
            block_type: block.kind.block_type(),
            body,
        })
    }

    fn body(&self, block: &Block) -> Option<BlockBody> {
        match &block.kind {
            BlockKind::Hero { source } => {
                let (lead, rest) = split_lead(self.post_cards(block, source))?;
                Some(BlockBody::Hero {
                    lead,
                    secondary: rest.into_iter().take(HERO_SECONDARY_LIMIT).collect(),
                })
            }
            BlockKind::Grid { source } => {
                let cards = self.post_cards(block, source);
                (!cards.is_empty()).then_some(BlockBody::Grid { cards })
            }
            BlockKind::List { source } | BlockKind::Highlight { source } => {
                let (lead, rest) = split_lead(self.post_cards(block, source))?;
                Some(BlockBody::Feature { lead, rest })
            }
            BlockKind::Docs => Some(self.documents(block.item_count)),
            BlockKind::DocCats => Some(self.document_categories()),
            BlockKind::Video => self.videos(block.item_count),
            BlockKind::Html { markup } => Some(BlockBody::Markup {
                html: markup.clone(),
            }),
            BlockKind::Stats => Some(BlockBody::Stats {
                stats: self.context.visitors,
            }),
            BlockKind::Calendar => Some(BlockBody::Calendar {
                month: MonthGrid::for_date(self.context.today),
            }),
            BlockKind::StaffList => Some(self.staff(block.item_count)),
        }
    }

    fn post_cards(&self, block: &Block, source: &ContentSource) -> Vec<PostCard> {
        let cap = effective_cap(
            block.kind.block_type(),
            block.item_count,
            self.snapshot.site.grid_cap(),
        );

        select_posts(&self.snapshot.posts, source, cap)
            .into_iter()
            .map(|post| self.post_card(post, block.position))
            .collect()
    }

    fn post_card(&self, post: &Post, position: Position) -> PostCard {
        let mut badges = self.categories.badges(&post.category);
        let mut hidden_badges = 0;
        if position == Position::Sidebar && badges.len() > SIDEBAR_BADGE_LIMIT {
            hidden_badges = badges.len() - SIDEBAR_BADGE_LIMIT;
            badges.truncate(SIDEBAR_BADGE_LIMIT);
        }

        PostCard {
            id: post.id.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            thumbnail: post.thumbnail.clone(),
            date: post.date.clone(),
            badges,
            hidden_badges,
        }
    }

    fn documents(&self, limit: usize) -> BlockBody {
        let rows: Vec<DocumentRow> = select_documents(&self.snapshot.documents, limit)
            .into_iter()
            .map(|doc| DocumentRow {
                id: doc.id.clone(),
                number: doc.number.clone(),
                title: doc.title.clone(),
                date: doc.date.clone(),
                download_url: doc.download_url.clone(),
                has_file: doc.has_file(),
            })
            .collect();

        if rows.is_empty() {
            return empty(EMPTY_DOCUMENTS);
        }
        BlockBody::Documents { rows }
    }

    fn document_categories(&self) -> BlockBody {
        let categories: Vec<DocumentCategoryLink> =
            select_document_categories(&self.snapshot.document_categories)
                .into_iter()
                .map(|c| DocumentCategoryLink {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    slug: c.slug.clone(),
                })
                .collect();

        if categories.is_empty() {
            return empty(EMPTY_DOCUMENT_CATEGORIES);
        }
        BlockBody::DocumentCategories { categories }
    }

    fn videos(&self, limit: usize) -> Option<BlockBody> {
        let videos: Vec<VideoEmbed> = select_videos(&self.snapshot.videos, limit)
            .into_iter()
            .map(|v| VideoEmbed {
                id: v.id.clone(),
                title: v.title.clone(),
                embed_url: v.embed_url(),
            })
            .collect();

        (!videos.is_empty()).then_some(BlockBody::Videos { videos })
    }

    fn staff(&self, limit: usize) -> BlockBody {
        let members: Vec<StaffCard> = select_staff(&self.snapshot.staff, limit)
            .into_iter()
            .map(|s| StaffCard {
                id: s.id.clone(),
                full_name: s.full_name.clone(),
                title: s.title.clone(),
                party_date: s.party_date.clone(),
                email: s.email.clone(),
                avatar_url: s.avatar_url.clone(),
            })
            .collect();

        if members.is_empty() {
            return empty(EMPTY_STAFF);
        }
        BlockBody::Staff { members }
    }
}

fn split_lead(cards: Vec<PostCard>) -> Option<(PostCard, Vec<PostCard>)> {
    let mut cards = cards.into_iter();
    let lead = cards.next()?;
    Some((lead, cards.collect()))
}

fn empty(message: &str) -> BlockBody {
    BlockBody::Empty {
        message: message.to_string(),
    }
}
