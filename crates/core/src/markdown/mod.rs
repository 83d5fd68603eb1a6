//! Markdown to HTML rendering.
//!
//! Sources are parsed with GitHub Flavored Markdown extensions (tables,
//! strikethrough, autolinks, task lists). Registered [`AstTransform`]s run
//! over the parse tree before HTML is produced.

pub mod renderer;
pub mod transform;
pub mod types;

pub use renderer::MarkdownRenderer;
pub use transform::{AstTransform, NoopTransform};
pub use types::{RenderError, RenderOptions, RenderedMarkdown};
