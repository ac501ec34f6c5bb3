//! Theme engine with Tera templates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tera::Tera;
use tracing::debug;

use crate::models::{Position, SiteConfig, parse_loose_datetime};
use crate::render::{BlockBody, RenderedBlock};
use crate::services::ComposedPage;

/// Shown in place of a main region that composed to nothing.
pub const EMPTY_REGION_PLACEHOLDER: &str = "Please configure content blocks.";

/// Built-in templates, registered under the names blocks look up.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("macros.html", include_str!("../../templates/macros.html")),
    ("block.html", include_str!("../../templates/block.html")),
    ("region.html", include_str!("../../templates/region.html")),
    ("page.html", include_str!("../../templates/page.html")),
    ("blocks/hero.html", include_str!("../../templates/blocks/hero.html")),
    ("blocks/grid.html", include_str!("../../templates/blocks/grid.html")),
    ("blocks/feature.html", include_str!("../../templates/blocks/feature.html")),
    ("blocks/documents.html", include_str!("../../templates/blocks/documents.html")),
    (
        "blocks/document_categories.html",
        include_str!("../../templates/blocks/document_categories.html"),
    ),
    ("blocks/videos.html", include_str!("../../templates/blocks/videos.html")),
    ("blocks/staff.html", include_str!("../../templates/blocks/staff.html")),
    ("blocks/markup.html", include_str!("../../templates/blocks/markup.html")),
    ("blocks/stats.html", include_str!("../../templates/blocks/stats.html")),
    ("blocks/calendar.html", include_str!("../../templates/blocks/calendar.html")),
    ("blocks/empty.html", include_str!("../../templates/blocks/empty.html")),
];

/// Turns rendered block descriptors into HTML.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with the built-in templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .context("failed to initialize built-in templates")?;
        Self::register_filters(&mut tera);

        debug!(count = BUILTIN_TEMPLATES.len(), "loaded built-in templates");
        Ok(Self { tera })
    }

    /// Create a theme engine whose templates in `template_dir` override the
    /// built-in ones.
    ///
    /// Override files are registered into the built-in set in one batch, so
    /// an override may import `macros.html` or extend `block.html` without
    /// shipping its own copy.
    pub fn with_overrides(template_dir: &Path) -> Result<Self> {
        if !template_dir.is_dir() {
            bail!("theme directory {} does not exist", template_dir.display());
        }

        let mut files = Vec::new();
        collect_templates(template_dir, template_dir, &mut files)?;

        let mut engine = Self::new()?;
        let count = files.len();
        engine
            .tera
            .add_template_files(files)
            .context("failed to load theme templates")?;

        debug!(dir = %template_dir.display(), count, "loaded theme overrides");
        Ok(engine)
    }

    fn register_filters(tera: &mut Tera) {
        // Stored dates are loose strings; show them day-first.
        tera.register_filter(
            "format_date",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let raw = tera::try_get_value!("format_date", "value", String, value);
                let formatted = parse_loose_datetime(&raw)
                    .map(|dt| dt.format("%d/%m/%Y").to_string())
                    .unwrap_or(raw);
                Ok(tera::Value::String(formatted))
            },
        );
    }

    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Template for a block body.
    pub fn template_for(body: &BlockBody) -> &'static str {
        match body {
            BlockBody::Hero { .. } => "blocks/hero.html",
            BlockBody::Grid { .. } => "blocks/grid.html",
            BlockBody::Feature { .. } => "blocks/feature.html",
            BlockBody::Documents { .. } => "blocks/documents.html",
            BlockBody::DocumentCategories { .. } => "blocks/document_categories.html",
            BlockBody::Videos { .. } => "blocks/videos.html",
            BlockBody::Staff { .. } => "blocks/staff.html",
            BlockBody::Markup { .. } => "blocks/markup.html",
            BlockBody::Stats { .. } => "blocks/stats.html",
            BlockBody::Calendar { .. } => "blocks/calendar.html",
            BlockBody::Empty { .. } => "blocks/empty.html",
        }
    }

    /// Render one block: its body template, then the block wrapper.
    pub fn render_block(&self, block: &RenderedBlock) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("block", block);
        context.insert("body", &block.body);

        let template = Self::template_for(&block.body);
        let content = self
            .tera
            .render(template, &context)
            .with_context(|| format!("failed to render {template} for block {}", block.id))?;
        context.insert("content", &content);

        self.tera
            .render("block.html", &context)
            .context("failed to render block wrapper")
    }

    /// Render a layout position.
    ///
    /// An empty main region shows [`EMPTY_REGION_PLACEHOLDER`]; an empty
    /// side region renders bare.
    pub fn render_region(&self, position: Position, blocks: &[RenderedBlock]) -> Result<String> {
        let rendered = blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Result<Vec<_>>>()?;

        let mut context = tera::Context::new();
        context.insert("position", position.as_str());
        context.insert("blocks", &rendered);
        if position == Position::Main {
            context.insert("placeholder", EMPTY_REGION_PLACEHOLDER);
        } else {
            context.insert("placeholder", &false);
        }

        self.tera
            .render("region.html", &context)
            .context("failed to render region template")
    }

    /// Render a full page shell around both regions.
    pub fn render_page(&self, site: &SiteConfig, page: &ComposedPage) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("site", site);
        context.insert("page", &page.page);
        context.insert("main", &self.render_region(Position::Main, &page.main)?);
        context.insert(
            "sidebar",
            &self.render_region(Position::Sidebar, &page.sidebar)?,
        );

        self.tera
            .render("page.html", &context)
            .context("failed to render page template")
    }
}

/// Collect `*.html` files under `dir`, named by their path relative to `root`
/// with `/` separators.
fn collect_templates(
    root: &Path,
    dir: &Path,
    files: &mut Vec<(PathBuf, Option<String>)>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read theme directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read theme directory {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_templates(root, &path, files)?;
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push((path, Some(name)));
    }
    Ok(())
}
