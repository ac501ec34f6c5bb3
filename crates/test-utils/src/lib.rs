//! Campus test utilities.
//!
//! Fixture builders for content snapshots: posts, blocks, categories,
//! documents, staff and videos.

use campus_kernel::models::{
    BlockRecord, Category, CategoryRef, ContentSnapshot, Document, Post, PostStatus, SiteConfig,
    StaffMember, Video,
};

/// Create a published test post.
pub fn test_post(id: &str, date: &str) -> TestPost {
    TestPost {
        post: Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            slug: id.to_string(),
            summary: format!("Summary of {id}"),
            date: date.to_string(),
            status: PostStatus::Published,
            ..Default::default()
        },
    }
}

/// A post builder.
#[derive(Debug, Clone)]
pub struct TestPost {
    post: Post,
}

impl TestPost {
    pub fn with_title(mut self, title: &str) -> Self {
        self.post.title = title.to_string();
        self
    }

    /// Set the raw category reference, e.g. `"news"` or `"[\"news\",\"activity\"]"`.
    pub fn with_category(mut self, raw: &str) -> Self {
        self.post.category = CategoryRef::from(raw);
        self
    }

    /// Set the category reference as a list.
    pub fn with_categories(mut self, slugs: &[&str]) -> Self {
        self.post.category =
            CategoryRef::from(slugs.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        self
    }

    pub fn featured(mut self) -> Self {
        self.post.is_featured = true;
        self
    }

    pub fn draft(mut self) -> Self {
        self.post.status = PostStatus::Draft;
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

/// Create a visible test block record.
pub fn test_block(id: &str, position: &str, block_type: &str) -> TestBlock {
    TestBlock {
        record: BlockRecord {
            id: id.to_string(),
            name: format!("Block {id}"),
            position: position.to_string(),
            block_type: block_type.to_string(),
            order: 1,
            item_count: 5,
            is_visible: true,
            html_content: None,
            target_page: None,
        },
    }
}

/// A block record builder.
#[derive(Debug, Clone)]
pub struct TestBlock {
    record: BlockRecord,
}

impl TestBlock {
    pub fn with_order(mut self, order: i32) -> Self {
        self.record.order = order;
        self
    }

    pub fn with_item_count(mut self, item_count: i64) -> Self {
        self.record.item_count = item_count;
        self
    }

    /// Content selector or markup, depending on the block type.
    pub fn with_content(mut self, content: &str) -> Self {
        self.record.html_content = Some(content.to_string());
        self
    }

    pub fn with_target_page(mut self, target: &str) -> Self {
        self.record.target_page = Some(target.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.record.is_visible = false;
        self
    }

    pub fn build(self) -> BlockRecord {
        self.record
    }
}

/// Create a post category.
pub fn test_category(slug: &str, name: &str, color: &str) -> Category {
    Category {
        id: slug.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        color: color.to_string(),
        order: 0,
    }
}

/// Create a document with a downloadable file.
pub fn test_document(id: &str, date: &str) -> Document {
    Document {
        id: id.to_string(),
        number: format!("{id}/QD"),
        title: format!("Document {id}"),
        date: date.to_string(),
        category_id: None,
        download_url: format!("https://files.example.org/{id}.pdf"),
    }
}

/// Create a staff member at the given sort order.
pub fn test_staff(id: &str, order: i32) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        full_name: format!("Staff {id}"),
        title: "Teacher".to_string(),
        order,
        ..Default::default()
    }
}

/// Create a visible video at the given sort order.
pub fn test_video(id: &str, order: i32) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        source_id: format!("yt-{id}"),
        is_visible: true,
        order,
        ..Default::default()
    }
}

/// Site configuration with hero and program blocks switched on and no grid cap.
pub fn open_site() -> SiteConfig {
    SiteConfig {
        name: "Test School".to_string(),
        show_hero: true,
        show_program: true,
        ..Default::default()
    }
}

/// Create a snapshot builder over [`open_site`].
pub fn test_snapshot() -> TestSnapshot {
    TestSnapshot {
        snapshot: ContentSnapshot {
            site: open_site(),
            ..Default::default()
        },
    }
}

/// A content snapshot builder.
#[derive(Debug, Clone)]
pub struct TestSnapshot {
    snapshot: ContentSnapshot,
}

impl TestSnapshot {
    pub fn with_post(mut self, post: TestPost) -> Self {
        self.snapshot.posts.push(post.build());
        self
    }

    pub fn with_block(mut self, block: TestBlock) -> Self {
        self.snapshot.blocks.push(block.build());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.snapshot.categories.push(category);
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.snapshot.documents.push(document);
        self
    }

    pub fn with_staff(mut self, member: StaffMember) -> Self {
        self.snapshot.staff.push(member);
        self
    }

    pub fn with_video(mut self, video: Video) -> Self {
        self.snapshot.videos.push(video);
        self
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.snapshot.site = site;
        self
    }

    /// Replace the site configuration from JSON, using stored field names.
    pub fn with_site_json(self, json: serde_json::Value) -> Self {
        let site = serde_json::from_value(json).unwrap_or_default();
        self.with_site(site)
    }

    pub fn build(self) -> ContentSnapshot {
        self.snapshot
    }
}
