//! Theme layer: rendered block descriptors to HTML.
//!
//! Tera autoescapes every text field; admin-authored markup blocks are the
//! one place raw HTML passes through.

mod engine;

pub use engine::{EMPTY_REGION_PLACEHOLDER, ThemeEngine};
