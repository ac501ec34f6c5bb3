#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Page composition integration tests.
//!
//! Scenarios run end to end: snapshot records, conversion, selection,
//! rendering and composition.

use campus_kernel::content::resolve_categories;
use campus_kernel::models::{CategoryRef, Page, Position, SiteConfig, VisitorStats};
use campus_kernel::render::{BlockBody, RenderedBlock};
use campus_kernel::services::{PageComposer, VisitorFeed};
use campus_test_utils::{
    open_site, test_block, test_category, test_document, test_post, test_snapshot, test_staff,
    test_video,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn card_ids(block: &RenderedBlock) -> Vec<&str> {
    match &block.body {
        BlockBody::Grid { cards } => cards.iter().map(|c| c.id.as_str()).collect(),
        BlockBody::Hero { lead, secondary } => std::iter::once(lead)
            .chain(secondary)
            .map(|c| c.id.as_str())
            .collect(),
        BlockBody::Feature { lead, rest } => std::iter::once(lead)
            .chain(rest)
            .map(|c| c.id.as_str())
            .collect(),
        other => panic!("not a post block: {other:?}"),
    }
}

fn block_ids(blocks: &[RenderedBlock]) -> Vec<&str> {
    blocks.iter().map(|b| b.id.as_str()).collect()
}

// -------------------------------------------------------------------------
// Scenarios
// -------------------------------------------------------------------------

#[test]
fn test_grid_selects_newest_within_item_count() {
    let snapshot = test_snapshot()
        .with_post(test_post("march", "2024-03-01"))
        .with_post(test_post("mid-feb", "2024-02-15"))
        .with_post(test_post("late-feb", "2024-02-20"))
        .with_block(test_block("grid", "main", "grid").with_item_count(2))
        .build();

    let composer = PageComposer::new(&snapshot).today(today());
    let main = composer.compose(Position::Main, Page::Home);

    assert_eq!(main.len(), 1);
    assert_eq!(card_ids(&main[0]), vec!["march", "late-feb"]);
}

#[test]
fn test_json_encoded_category_reference_filters_by_slug() {
    let raw = r#"["news","activity"]"#;
    assert_eq!(
        resolve_categories(&CategoryRef::from(raw)),
        vec!["news".to_string(), "activity".to_string()]
    );

    let snapshot = test_snapshot()
        .with_post(test_post("tagged", "2024-03-01").with_category(raw))
        .with_block(
            test_block("activity", "main", "grid")
                .with_order(1)
                .with_content("activity"),
        )
        .with_block(
            test_block("announcement", "main", "grid")
                .with_order(2)
                .with_content("announcement"),
        )
        .build();

    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);

    assert_eq!(block_ids(&main), vec!["activity"]);
    assert_eq!(card_ids(&main[0]), vec!["tagged"]);
}

#[test]
fn test_hero_toggle_suppresses_hero_regardless_of_items() {
    let mut site = open_site();
    site.show_hero = false;
    let snapshot = test_snapshot()
        .with_site(site)
        .with_post(test_post("a", "2024-03-01"))
        .with_post(test_post("b", "2024-03-02"))
        .with_block(test_block("hero", "main", "hero").with_order(1))
        .with_block(test_block("grid", "main", "grid").with_order(2))
        .build();

    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);
    assert_eq!(block_ids(&main), vec!["grid"]);
}

#[test]
fn test_grid_cap_overrides_item_count() {
    let mut site = open_site();
    site.grid_item_cap = 3;
    let mut snapshot = test_snapshot()
        .with_site(site)
        .with_block(test_block("grid", "main", "grid").with_item_count(10));
    for day in 1..=8 {
        snapshot = snapshot.with_post(test_post(&format!("p{day}"), &format!("2024-03-0{day}")));
    }
    let snapshot = snapshot.build();

    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);
    assert_eq!(card_ids(&main[0]), vec!["p8", "p7", "p6"]);
}

#[test]
fn test_target_page_scope() {
    let snapshot = test_snapshot()
        .with_post(test_post("a", "2024-03-01"))
        .with_block(test_block("related", "sidebar", "list").with_target_page("detail"))
        .with_block(test_block("everywhere", "sidebar", "stats").with_order(2))
        .build();
    let composer = PageComposer::new(&snapshot).today(today());

    let home = composer.compose(Position::Sidebar, Page::Home);
    assert_eq!(block_ids(&home), vec!["everywhere"]);

    let detail = composer.compose(Position::Sidebar, Page::Detail);
    assert_eq!(block_ids(&detail), vec!["related", "everywhere"]);
}

// -------------------------------------------------------------------------
// Properties
// -------------------------------------------------------------------------

#[test]
fn test_composing_twice_is_identical() {
    let snapshot = test_snapshot()
        .with_category(test_category("news", "News", "blue"))
        .with_post(test_post("a", "2024-03-01").with_category("news"))
        .with_post(test_post("b", "2024-02-01").featured())
        .with_document(test_document("d1", "2024-01-05"))
        .with_staff(test_staff("s1", 1))
        .with_video(test_video("v1", 1))
        .with_block(test_block("hero", "main", "hero").with_order(1))
        .with_block(test_block("featured", "main", "highlight").with_order(2).with_content("featured"))
        .with_block(test_block("docs", "sidebar", "docs").with_order(1))
        .with_block(test_block("staff", "sidebar", "staff_list").with_order(2))
        .with_block(test_block("video", "sidebar", "video").with_order(3))
        .with_block(test_block("calendar", "sidebar", "calendar").with_order(4))
        .build();
    let composer = PageComposer::new(&snapshot).today(today());

    assert_eq!(composer.compose_page(Page::Home), composer.compose_page(Page::Home));
    assert_eq!(
        composer.compose(Position::Main, Page::Home),
        composer.compose(Position::Main, Page::Home)
    );
}

#[test]
fn test_selected_items_never_exceed_cap_and_are_newest_first() {
    let mut snapshot = test_snapshot();
    for (i, date) in ["2023-05-01", "2024-01-09", "2022-12-31", "2024-02-29", "2023-11-11"]
        .iter()
        .enumerate()
    {
        snapshot = snapshot.with_post(test_post(&format!("p{i}"), date));
    }
    let base = snapshot.build();

    for cap in 0..7 {
        let mut snapshot = base.clone();
        snapshot.blocks = vec![test_block("grid", "main", "grid").with_item_count(cap).build()];
        let main = PageComposer::new(&snapshot)
            .today(today())
            .compose(Position::Main, Page::Home);

        let expected = usize::try_from(cap).unwrap().min(5);
        if expected == 0 {
            assert!(main.is_empty(), "cap {cap} should suppress the grid");
            continue;
        }
        let BlockBody::Grid { cards } = &main[0].body else {
            panic!("expected grid");
        };
        assert_eq!(cards.len(), expected);
        assert!(cards.windows(2).all(|w| w[0].date >= w[1].date));
    }
}

#[test]
fn test_drafts_never_appear() {
    let snapshot = test_snapshot()
        .with_post(test_post("draft", "2024-04-01").draft())
        .with_block(test_block("grid", "main", "grid"))
        .build();
    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);
    assert!(main.is_empty());
}

#[test]
fn test_unknown_block_type_is_skipped_not_fatal() {
    let snapshot = test_snapshot()
        .with_post(test_post("a", "2024-03-01"))
        .with_block(test_block("slider", "main", "slider").with_order(1))
        .with_block(test_block("grid", "main", "grid").with_order(2))
        .build();
    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);
    assert_eq!(block_ids(&main), vec!["grid"]);
}

#[test]
fn test_missing_site_toggles_hide_hero_and_program() {
    let snapshot = test_snapshot()
        .with_site(SiteConfig::default())
        .with_post(test_post("a", "2024-03-01"))
        .with_block(test_block("hero", "main", "hero").with_order(1))
        .with_block(test_block("list", "main", "list").with_order(2))
        .with_block(test_block("side-list", "sidebar", "list"))
        .build();
    let page = PageComposer::new(&snapshot)
        .today(today())
        .compose_page(Page::Home);
    assert!(page.main.is_empty());
    assert_eq!(block_ids(&page.sidebar), vec!["side-list"]);
}

#[test]
fn test_stored_site_field_names_are_understood() {
    let snapshot = test_snapshot()
        .with_site_json(serde_json::json!({
            "showWelcomeBanner": true,
            "homeShowProgram": false,
            "homeNewsCount": 1
        }))
        .with_post(test_post("a", "2024-03-01"))
        .with_post(test_post("b", "2024-03-02"))
        .with_block(test_block("hero", "main", "hero").with_order(1))
        .with_block(test_block("grid", "main", "grid").with_order(2))
        .with_block(test_block("list", "main", "list").with_order(3))
        .build();
    let main = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Main, Page::Home);

    assert_eq!(block_ids(&main), vec!["hero", "grid"]);
    assert_eq!(card_ids(&main[1]), vec!["b"]);
}

#[test]
fn test_empty_listings_keep_their_block() {
    let snapshot = test_snapshot()
        .with_block(test_block("docs", "sidebar", "docs").with_order(1))
        .with_block(test_block("staff", "sidebar", "staff_list").with_order(2))
        .with_block(test_block("video", "sidebar", "video").with_order(3))
        .build();
    let sidebar = PageComposer::new(&snapshot)
        .today(today())
        .compose(Position::Sidebar, Page::Home);

    assert_eq!(block_ids(&sidebar), vec!["docs", "staff"]);
    assert!(matches!(sidebar[0].body, BlockBody::Empty { .. }));
}

#[test]
fn test_visitor_feed_reading_reaches_stats_block() {
    let mut snapshot = test_snapshot()
        .with_block(test_block("stats", "sidebar", "stats").with_order(1))
        .build();
    snapshot.visitors = VisitorStats {
        online: 2,
        today: 40,
        month: 900,
        total: 12000,
    };

    let feed = VisitorFeed::new(snapshot.visitors);
    feed.set_online(17);

    let stats_of = |feed: &VisitorFeed| {
        let sidebar = PageComposer::new(&snapshot)
            .today(today())
            .visitors(feed.current())
            .compose(Position::Sidebar, Page::Home);
        match &sidebar[0].body {
            BlockBody::Stats { stats } => *stats,
            other => panic!("expected stats block, got {other:?}"),
        }
    };

    let stats = stats_of(&feed);
    assert_eq!(stats.online, 17);
    assert_eq!(stats.total, 12000);

    feed.replace(VisitorStats {
        online: 3,
        today: 41,
        month: 901,
        total: 12001,
    });
    assert_eq!(stats_of(&feed).total, 12001);

    // The snapshot itself is never touched.
    assert_eq!(snapshot.visitors.online, 2);
}
