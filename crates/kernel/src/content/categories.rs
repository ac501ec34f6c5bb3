//! Category resolution for posts.
//!
//! Badge rendering and category filtering both go through
//! [`resolve_categories`], so they always agree on malformed data.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, CategoryRef};

/// Normalize a post's raw category reference into an ordered list of slugs.
///
/// Never fails: a string that looks like a JSON array but does not parse as
/// one is treated as a single plain slug.
pub fn resolve_categories(raw: &CategoryRef) -> Vec<String> {
    match raw {
        CategoryRef::Absent => Vec::new(),
        CategoryRef::List(slugs) => slugs.clone(),
        CategoryRef::Text(text) if text.is_empty() => Vec::new(),
        CategoryRef::Text(text) => {
            if text.starts_with('[') {
                if let Ok(slugs) = serde_json::from_str::<Vec<String>>(text) {
                    return slugs;
                }
            }
            vec![text.clone()]
        }
    }
}

/// A category badge shown on a post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub slug: String,
    pub name: String,
    pub color: String,
}

/// Slug lookup over the active category set.
pub struct CategoryIndex<'a> {
    by_slug: HashMap<&'a str, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            by_slug: categories.iter().map(|c| (c.slug.as_str(), c)).collect(),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&'a Category> {
        self.by_slug.get(slug).copied()
    }

    /// Badges for a raw reference, in reference order.
    ///
    /// Slugs with no matching category are dropped; the post still renders.
    pub fn badges(&self, raw: &CategoryRef) -> Vec<Badge> {
        resolve_categories(raw)
            .into_iter()
            .filter_map(|slug| match self.get(&slug) {
                Some(category) => Some(Badge {
                    name: category.name.clone(),
                    color: category.color.clone(),
                    slug,
                }),
                None => {
                    tracing::debug!(slug = %slug, "dropping badge for unknown category");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str, name: &str) -> Category {
        Category {
            id: slug.into(),
            name: name.into(),
            slug: slug.into(),
            color: "blue".into(),
            order: 0,
        }
    }

    #[test]
    fn absent_and_empty_are_empty() {
        assert!(resolve_categories(&CategoryRef::Absent).is_empty());
        assert!(resolve_categories(&CategoryRef::Text(String::new())).is_empty());
    }

    #[test]
    fn list_is_returned_unchanged() {
        let raw = CategoryRef::List(vec!["b".into(), "a".into()]);
        assert_eq!(resolve_categories(&raw), vec!["b", "a"]);
    }

    #[test]
    fn json_encoded_list() {
        let raw = CategoryRef::from(r#"["news","activity"]"#);
        assert_eq!(resolve_categories(&raw), vec!["news", "activity"]);
    }

    #[test]
    fn plain_string_is_single_slug() {
        let raw = CategoryRef::from("announcement");
        assert_eq!(resolve_categories(&raw), vec!["announcement"]);
    }

    #[test]
    fn malformed_json_falls_back_to_raw_string() {
        let raw = CategoryRef::from(r#"["news","#);
        assert_eq!(resolve_categories(&raw), vec![r#"["news","#]);

        let wrong_shape = CategoryRef::from("[1, 2]");
        assert_eq!(resolve_categories(&wrong_shape), vec!["[1, 2]"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        for raw in [
            CategoryRef::from(r#"["a","b"]"#),
            CategoryRef::from("[broken"),
            CategoryRef::from("plain"),
            CategoryRef::Absent,
        ] {
            assert_eq!(resolve_categories(&raw), resolve_categories(&raw));
        }
    }

    #[test]
    fn dangling_slugs_are_dropped_from_badges() {
        let categories = vec![category("news", "News"), category("activity", "Activities")];
        let index = CategoryIndex::new(&categories);

        let badges = index.badges(&CategoryRef::from(r#"["activity","retired","news"]"#));
        let names: Vec<_> = badges.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Activities", "News"]);
    }
}
