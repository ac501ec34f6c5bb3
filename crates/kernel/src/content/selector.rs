//! Block content selection.
//!
//! Content blocks (hero, grid, list, highlight) draw a filtered, sorted and
//! capped slice of posts. The other listing kinds read their own collection
//! with a simple ordering rule.

use std::cmp::Reverse;

use crate::models::{
    BlockType, ContentSource, Document, DocumentCategory, Post, StaffMember, Video,
};

use super::categories::resolve_categories;

/// The item limit actually applied to a block.
///
/// Grid blocks take the site-wide grid cap when one is set; every other kind
/// uses its own item count.
pub fn effective_cap(block_type: BlockType, item_count: usize, grid_cap: Option<usize>) -> usize {
    match (block_type, grid_cap) {
        (BlockType::Grid, Some(cap)) if cap > 0 => cap,
        _ => item_count,
    }
}

/// Select the posts a content block shows.
///
/// Published posts only, narrowed by `source`, newest first (stable for equal
/// dates, undated posts last), truncated to `cap`. An empty result means the
/// block has nothing to show.
pub fn select_posts<'a>(posts: &'a [Post], source: &ContentSource, cap: usize) -> Vec<&'a Post> {
    let mut selected: Vec<&Post> = posts
        .iter()
        .filter(|p| p.is_published())
        .filter(|p| match source {
            ContentSource::All => true,
            ContentSource::Featured => p.is_featured,
            ContentSource::Category(slug) => resolve_categories(&p.category)
                .iter()
                .any(|s| s == slug),
        })
        .collect();

    selected.sort_by_cached_key(|p| Reverse(p.published_at()));
    selected.truncate(cap);
    selected
}

/// Newest documents first, first `limit`.
pub fn select_documents(documents: &[Document], limit: usize) -> Vec<&Document> {
    let mut selected: Vec<&Document> = documents.iter().collect();
    selected.sort_by_cached_key(|d| Reverse(d.issued_at()));
    selected.truncate(limit);
    selected
}

/// Every document category, by sort order.
pub fn select_document_categories(categories: &[DocumentCategory]) -> Vec<&DocumentCategory> {
    let mut selected: Vec<&DocumentCategory> = categories.iter().collect();
    selected.sort_by_key(|c| c.order);
    selected
}

/// Visible videos by sort order, first `limit` (at least one).
pub fn select_videos(videos: &[Video], limit: usize) -> Vec<&Video> {
    let mut selected: Vec<&Video> = videos.iter().filter(|v| v.is_visible).collect();
    selected.sort_by_key(|v| v.order);
    selected.truncate(limit.max(1));
    selected
}

/// Staff by sort order, first `limit`.
pub fn select_staff(staff: &[StaffMember], limit: usize) -> Vec<&StaffMember> {
    let mut selected: Vec<&StaffMember> = staff.iter().collect();
    selected.sort_by_key(|s| s.order);
    selected.truncate(limit);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRef, PostStatus};

    fn post(id: &str, date: &str) -> Post {
        Post {
            id: id.into(),
            title: id.into(),
            date: date.into(),
            status: PostStatus::Published,
            ..Default::default()
        }
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn newest_first_and_capped() {
        let posts = vec![
            post("a", "2024-03-01"),
            post("b", "2024-02-15"),
            post("c", "2024-02-20"),
        ];
        let selected = select_posts(&posts, &ContentSource::All, 2);
        assert_eq!(ids(&selected), vec!["a", "c"]);
    }

    #[test]
    fn drafts_and_scheduled_are_excluded() {
        let mut draft = post("draft", "2024-05-01");
        draft.status = PostStatus::Draft;
        let mut scheduled = post("scheduled", "2024-05-02");
        scheduled.status = PostStatus::Scheduled;
        let posts = vec![draft, scheduled, post("live", "2024-01-01")];

        let selected = select_posts(&posts, &ContentSource::All, 10);
        assert_eq!(ids(&selected), vec!["live"]);
    }

    #[test]
    fn featured_source() {
        let mut featured = post("f", "2024-01-01");
        featured.is_featured = true;
        let posts = vec![post("plain", "2024-06-01"), featured];

        let selected = select_posts(&posts, &ContentSource::Featured, 10);
        assert_eq!(ids(&selected), vec!["f"]);
    }

    #[test]
    fn category_source_uses_resolver() {
        let mut tagged = post("tagged", "2024-01-01");
        tagged.category = CategoryRef::from(r#"["news","activity"]"#);
        let mut other = post("other", "2024-01-02");
        other.category = CategoryRef::from("announcement");
        let posts = vec![tagged, other];

        let activity = select_posts(&posts, &ContentSource::Category("activity".into()), 10);
        assert_eq!(ids(&activity), vec!["tagged"]);

        let announcement =
            select_posts(&posts, &ContentSource::Category("announcement".into()), 10);
        assert_eq!(ids(&announcement), vec!["other"]);
    }

    #[test]
    fn equal_dates_keep_collection_order() {
        let posts = vec![
            post("first", "2024-03-01"),
            post("second", "2024-03-01"),
            post("third", "2024-03-01"),
        ];
        let selected = select_posts(&posts, &ContentSource::All, 10);
        assert_eq!(ids(&selected), vec!["first", "second", "third"]);
    }

    #[test]
    fn undated_posts_sort_last() {
        let posts = vec![post("undated", ""), post("dated", "2020-01-01")];
        let selected = select_posts(&posts, &ContentSource::All, 10);
        assert_eq!(ids(&selected), vec!["dated", "undated"]);
    }

    #[test]
    fn zero_cap_selects_nothing() {
        let posts = vec![post("a", "2024-03-01")];
        assert!(select_posts(&posts, &ContentSource::All, 0).is_empty());
    }

    #[test]
    fn grid_cap_overrides_only_grids() {
        assert_eq!(effective_cap(BlockType::Grid, 10, Some(3)), 3);
        assert_eq!(effective_cap(BlockType::Grid, 10, None), 10);
        assert_eq!(effective_cap(BlockType::List, 10, Some(3)), 10);
        assert_eq!(effective_cap(BlockType::Hero, 5, Some(3)), 5);
    }

    #[test]
    fn videos_visible_by_order() {
        let videos = vec![
            Video {
                id: "late".into(),
                is_visible: true,
                order: 2,
                ..Default::default()
            },
            Video {
                id: "hidden".into(),
                is_visible: false,
                order: 0,
                ..Default::default()
            },
            Video {
                id: "early".into(),
                is_visible: true,
                order: 1,
                ..Default::default()
            },
        ];
        let selected: Vec<_> = select_videos(&videos, 0).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(selected, vec!["early"]);

        let selected: Vec<_> = select_videos(&videos, 5).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(selected, vec!["early", "late"]);
    }

    #[test]
    fn documents_newest_first() {
        let documents = vec![
            Document {
                id: "old".into(),
                date: "2023-09-01".into(),
                ..Default::default()
            },
            Document {
                id: "new".into(),
                date: "2024-01-10".into(),
                ..Default::default()
            },
        ];
        let selected: Vec<_> = select_documents(&documents, 1)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(selected, vec!["new"]);
    }
}
