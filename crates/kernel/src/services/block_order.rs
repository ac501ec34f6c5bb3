//! Block ordering and small administrative edits.
//!
//! Every operation returns updated blocks and leaves its input untouched.
//! Sort orders within a position are kept dense: 1..N with no gaps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::models::{Block, ContentSource, Position};

/// Direction for a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Blocks of `position` in their current display order.
pub fn position_sequence(blocks: &[Block], position: Position) -> Vec<&Block> {
    let mut seq: Vec<&Block> = blocks.iter().filter(|b| b.position == position).collect();
    seq.sort_by_key(|b| b.order);
    seq
}

/// Renumber `position` to follow `desired`, which must list every block of
/// that position exactly once.
///
/// Returns the whole collection in its original order; blocks of other
/// positions come back unchanged.
pub fn assign_dense_order(
    blocks: &[Block],
    position: Position,
    desired: &[&str],
) -> Result<Vec<Block>, OrderError> {
    let mut seen = HashSet::new();
    for id in desired {
        let block = blocks
            .iter()
            .find(|b| b.id == *id)
            .ok_or_else(|| OrderError::NotFound((*id).to_string()))?;
        if block.position != position {
            return Err(OrderError::WrongPosition {
                id: block.id.clone(),
                expected: position.as_str(),
                actual: block.position.as_str(),
            });
        }
        if !seen.insert(*id) {
            return Err(OrderError::Duplicate((*id).to_string()));
        }
    }

    let expected = blocks.iter().filter(|b| b.position == position).count();
    if desired.len() != expected {
        return Err(OrderError::Incomplete {
            given: desired.len(),
            expected,
        });
    }

    Ok(blocks
        .iter()
        .map(|block| {
            let mut block = block.clone();
            if block.position == position {
                if let Some(index) = desired.iter().position(|id| *id == block.id) {
                    block.order = dense_rank(index);
                }
            }
            block
        })
        .collect())
}

/// Move one block a single step within its position.
///
/// Moving past either end changes nothing but the position is still
/// renumbered densely.
pub fn move_block(
    blocks: &[Block],
    id: &str,
    direction: Direction,
) -> Result<Vec<Block>, OrderError> {
    let block = blocks
        .iter()
        .find(|b| b.id == id)
        .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
    let position = block.position;

    let mut ids: Vec<&str> = position_sequence(blocks, position)
        .into_iter()
        .map(|b| b.id.as_str())
        .collect();

    if let Some(index) = ids.iter().position(|candidate| *candidate == id) {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|t| *t < ids.len()),
        };
        if let Some(target) = target {
            ids.swap(index, target);
        }
    }

    tracing::debug!(block = id, ?direction, position = position.as_str(), "moving block");
    assign_dense_order(blocks, position, &ids)
}

/// Sort order for a block appended to `position`.
pub fn next_sort_order(blocks: &[Block], position: Position) -> i32 {
    blocks
        .iter()
        .filter(|b| b.position == position)
        .map(|b| b.order)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

pub fn set_visibility(block: &Block, is_visible: bool) -> Block {
    Block {
        is_visible,
        ..block.clone()
    }
}

pub fn set_item_count(block: &Block, item_count: usize) -> Block {
    Block {
        item_count,
        ..block.clone()
    }
}

/// Point a content block at a different source.
///
/// Returns `None` for kinds that do not draw posts.
pub fn set_content_source(block: &Block, source: ContentSource) -> Option<Block> {
    let mut updated = block.clone();
    updated.set_source(source).then_some(updated)
}

fn dense_rank(index: usize) -> i32 {
    i32::try_from(index + 1).unwrap_or(i32::MAX)
}
