use std::fmt;

use comrak::{Arena, Options, format_html, parse_document};

use super::transform::{
    AstTransform, DEFAULT_PRIORITY, NoopTransform, Prioritized, insert_prioritized,
};
use super::types::{RenderError, RenderOptions, RenderedMarkdown};

/// Renders markdown sources to HTML.
///
/// A renderer is immutable once built and can be shared between threads.
pub struct MarkdownRenderer {
    options: RenderOptions,
    transforms: Vec<Prioritized>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        let mut renderer = Self { options, transforms: Vec::new() };
        renderer.register(DEFAULT_PRIORITY, NoopTransform);
        renderer
    }

    /// Builder form of [`MarkdownRenderer::register`].
    pub fn with_transform(mut self, priority: i32, transform: impl AstTransform + 'static) -> Self {
        self.register(priority, transform);
        self
    }

    /// Register a transform. Higher priorities run first.
    pub fn register(&mut self, priority: i32, transform: impl AstTransform + 'static) {
        insert_prioritized(
            &mut self.transforms,
            Prioritized { priority, transform: Box::new(transform) },
        );
    }

    /// Names of the registered transforms in the order they run.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|p| p.transform.name()).collect()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `source` to HTML, returning the source alongside it.
    pub fn render(&self, source: &str) -> Result<RenderedMarkdown, RenderError> {
        let arena = Arena::new();
        let options = comrak_options(&self.options);
        let root = parse_document(&arena, source, &options);

        for entry in &self.transforms {
            tracing::trace!(transform = entry.transform.name(), "applying transform");
            entry.transform.transform(root);
        }

        let mut out = Vec::with_capacity(source.len() * 2);
        format_html(root, &options, &mut out).map_err(RenderError::Format)?;

        Ok(RenderedMarkdown { html: String::from_utf8(out)?, raw: source.to_string() })
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkdownRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownRenderer")
            .field("options", &self.options)
            .field("transforms", &self.transform_names())
            .finish()
    }
}

fn comrak_options(render: &RenderOptions) -> Options<'static> {
    let mut options = Options::default();
    // GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options.parse.smart = false;

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = render.allow_raw_html;

    options
}
