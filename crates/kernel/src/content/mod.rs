//! Content selection: category resolution and per-block item selection.

mod categories;
mod selector;

pub use categories::{Badge, CategoryIndex, resolve_categories};
pub use selector::{
    effective_cap, select_document_categories, select_documents, select_posts, select_staff,
    select_videos,
};
