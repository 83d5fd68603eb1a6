use serde::Deserialize;
use thiserror::Error;

/// Options that change how HTML is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Pass raw HTML blocks and inline tags through to the output.
    /// When false they are replaced with a comment.
    #[serde(default)]
    pub allow_raw_html: bool,
}

/// Output of a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// The rendered HTML.
    pub html: String,
    /// The markdown source, unchanged.
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format html: {0}")]
    Format(#[source] std::io::Error),

    #[error("rendered html is not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
