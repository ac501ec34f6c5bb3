//! Command implementations for the `campus` binary.
//!
//! Each command loads the snapshot, works on it in memory and prints the
//! result to stdout. Nothing is written back to the content store.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::models::{Block, BlockRecord, ContentSnapshot, Page, Position};
use crate::permissions::{Role, visible_menu};
use crate::services::block_order::position_sequence;
use crate::services::{Direction, PageComposer, move_block};
use crate::theme::ThemeEngine;

/// Options for [`cmd_render`] not covered by [`Config`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Only this position; both when `None`.
    pub position: Option<Position>,

    /// Calendar date; the local date when `None`.
    pub today: Option<NaiveDate>,
}

/// Compose a page and print HTML or JSON descriptors.
pub fn cmd_render(config: &Config, options: &RenderOptions) -> Result<()> {
    let snapshot = ContentSnapshot::load(config.snapshot_path()?)?;
    let output = render_output(config, &snapshot, options)?;
    println!("{output}");
    Ok(())
}

/// Build the `render` output without printing it.
pub fn render_output(
    config: &Config,
    snapshot: &ContentSnapshot,
    options: &RenderOptions,
) -> Result<String> {
    let page = Page::from_route(&config.page);
    let mut composer = PageComposer::new(snapshot);
    if let Some(today) = options.today {
        composer = composer.today(today);
    }

    info!(?page, blocks = composer.blocks().len(), "composing page");

    match (options.position, config.output) {
        (Some(position), OutputFormat::Json) => {
            serde_json::to_string_pretty(&composer.compose(position, page))
                .context("failed to serialize rendered blocks")
        }
        (None, OutputFormat::Json) => serde_json::to_string_pretty(&composer.compose_page(page))
            .context("failed to serialize composed page"),
        (Some(position), OutputFormat::Html) => {
            theme(config)?.render_region(position, &composer.compose(position, page))
        }
        (None, OutputFormat::Html) => {
            theme(config)?.render_page(&snapshot.site, &composer.compose_page(page))
        }
    }
}

fn theme(config: &Config) -> Result<ThemeEngine> {
    match &config.theme_dir {
        Some(dir) => ThemeEngine::with_overrides(dir),
        None => ThemeEngine::new(),
    }
}

/// List blocks by position and sort order.
pub fn cmd_blocks(config: &Config) -> Result<()> {
    let snapshot = ContentSnapshot::load(config.snapshot_path()?)?;
    let composer = PageComposer::new(&snapshot);
    print!("{}", blocks_table(composer.blocks()));
    Ok(())
}

/// Format blocks as a table, grouped by position.
pub fn blocks_table(blocks: &[Block]) -> String {
    let mut out = String::new();
    if blocks.is_empty() {
        out.push_str("No blocks configured.\n");
        return out;
    }

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:<9} {:>5} {:<20} {:<10} {:<8} {:<7} {}",
        "POSITION", "ORDER", "ID", "TYPE", "VISIBLE", "PAGES", "SOURCE"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));

    for position in Position::ALL {
        for block in position_sequence(blocks, position) {
            let visible = if block.is_visible { "yes" } else { "no" };
            let source = block.kind.source().map_or("-", |s| s.as_selector());
            let _ = writeln!(
                out,
                "{:<9} {:>5} {:<20} {:<10} {:<8} {:<7} {}",
                position.as_str(),
                block.order,
                block.id,
                block.kind.block_type().as_str(),
                visible,
                block.target_page.as_str(),
                source
            );
        }
    }
    out
}

/// Move a block one step and print the renumbered collection as JSON.
pub fn cmd_move(config: &Config, id: &str, direction: Direction) -> Result<()> {
    let snapshot = ContentSnapshot::load(config.snapshot_path()?)?;
    let composer = PageComposer::new(&snapshot);

    let moved = move_block(composer.blocks(), id, direction)
        .with_context(|| format!("cannot move block '{id}'"))?;
    let records: Vec<BlockRecord> = moved.into_iter().map(BlockRecord::from).collect();

    info!(block = id, ?direction, "block moved");
    println!(
        "{}",
        serde_json::to_string_pretty(&records).context("failed to serialize blocks")?
    );
    Ok(())
}

/// Print the admin menu entries visible to `role`.
pub fn cmd_menu(role: &str) -> Result<()> {
    let role: Role = match role.parse() {
        Ok(role) => role,
        Err(e) => bail!(e),
    };

    println!("{:<18} {:<22} {}", "ID", "LABEL", "MIN ROLE");
    println!("{}", "-".repeat(50));
    for entry in visible_menu(role) {
        println!("{:<18} {:<22} {}", entry.id, entry.label, entry.min_role);
    }
    Ok(())
}
