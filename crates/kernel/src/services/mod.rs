//! Composition and administration services.
//!
//! Everything here works on an already-loaded [`crate::models::ContentSnapshot`];
//! fetching and persisting content happens elsewhere.

pub mod block_order;
pub mod composer;
pub mod visitor_feed;

pub use block_order::{Direction, assign_dense_order, move_block, next_sort_order};
pub use composer::{ComposedPage, PageComposer, compose_position};
pub use visitor_feed::VisitorFeed;
