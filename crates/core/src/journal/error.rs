use thiserror::Error;

use crate::markdown::RenderError;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal root does not exist or is not a directory: {0}")]
    MissingRoot(String),

    #[error("invalid entry date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("entry contents are empty")]
    EmptyContent,

    #[error("failed to read entry {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write entry {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render entry: {0}")]
    Render(#[from] RenderError),
}

impl JournalError {
    /// True for problems with what the caller asked for, as opposed to
    /// failures while touching the filesystem or rendering.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::EmptyContent)
    }

    /// A message safe to show without exposing filesystem paths.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingRoot(_) => "journal not found".to_string(),
            Self::Read { .. } => "failed to read journal entry".to_string(),
            Self::Write { .. } => "failed to save journal entry".to_string(),
            Self::Render(_) => "failed to render journal entry".to_string(),
            Self::InvalidDate(_) | Self::EmptyContent => self.to_string(),
        }
    }
}
