//! Page composition.
//!
//! Converts stored block records once, then composes each layout position
//! for a page: visible blocks of that position, in sort order, with
//! suppressed blocks dropped.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::models::{Block, ContentSnapshot, Page, Position, VisitorStats};
use crate::render::{BlockRenderer, RenderContext, RenderedBlock};

/// Composed output for both layout positions of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPage {
    pub page: Page,
    pub main: Vec<RenderedBlock>,
    pub sidebar: Vec<RenderedBlock>,
}

impl ComposedPage {
    pub fn region(&self, position: Position) -> &[RenderedBlock] {
        match position {
            Position::Main => &self.main,
            Position::Sidebar => &self.sidebar,
        }
    }
}

/// Composes pages from one content snapshot.
///
/// The composer holds no mutable state; composing the same position twice
/// yields the same output.
pub struct PageComposer<'a> {
    snapshot: &'a ContentSnapshot,
    blocks: Vec<Block>,
    today: NaiveDate,
    visitors: VisitorStats,
}

impl<'a> PageComposer<'a> {
    /// Build a composer, converting the snapshot's block records.
    ///
    /// Records that fail conversion are logged and left out.
    pub fn new(snapshot: &'a ContentSnapshot) -> Self {
        let blocks = snapshot
            .blocks
            .iter()
            .cloned()
            .filter_map(|record| match Block::try_from(record) {
                Ok(block) => Some(block),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping misconfigured block");
                    None
                }
            })
            .collect();

        Self::with_blocks(snapshot, blocks)
    }

    /// Build a composer over already-typed blocks.
    pub fn with_blocks(snapshot: &'a ContentSnapshot, blocks: Vec<Block>) -> Self {
        Self {
            snapshot,
            blocks,
            today: Local::now().date_naive(),
            visitors: snapshot.visitors,
        }
    }

    /// Fix the date used by calendar blocks.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Use a fresher visitor reading than the snapshot's.
    pub fn visitors(mut self, visitors: VisitorStats) -> Self {
        self.visitors = visitors;
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Compose one layout position of `page`.
    pub fn compose(&self, position: Position, page: Page) -> Vec<RenderedBlock> {
        let renderer = BlockRenderer::new(self.snapshot, self.context(page));
        compose_position(&self.blocks, position, &renderer)
    }

    /// Compose both layout positions of `page`.
    pub fn compose_page(&self, page: Page) -> ComposedPage {
        let renderer = BlockRenderer::new(self.snapshot, self.context(page));
        let main = compose_position(&self.blocks, Position::Main, &renderer);
        let sidebar = compose_position(&self.blocks, Position::Sidebar, &renderer);

        tracing::debug!(
            ?page,
            main = main.len(),
            sidebar = sidebar.len(),
            "composed page"
        );

        ComposedPage {
            page,
            main,
            sidebar,
        }
    }

    fn context(&self, page: Page) -> RenderContext {
        RenderContext {
            page,
            today: self.today,
            visitors: self.visitors,
        }
    }
}

/// Render the visible blocks of `position` in sort order.
///
/// Equal sort orders keep their collection order.
pub fn compose_position(
    blocks: &[Block],
    position: Position,
    renderer: &BlockRenderer<'_>,
) -> Vec<RenderedBlock> {
    let mut selected: Vec<&Block> = blocks
        .iter()
        .filter(|b| b.position == position && b.is_visible)
        .collect();
    selected.sort_by_key(|b| b.order);

    selected
        .into_iter()
        .filter_map(|block| renderer.render(block).into_rendered())
        .collect()
}
