#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core library for chronicles: discovers date-named markdown entries in a
//! journal folder, keeps an in-memory index of them, and renders entries to
//! HTML on demand.

pub mod config;
pub mod journal;
pub mod markdown;

pub use journal::{Journal, JournalError, RenderedDocument, SearchResult};
pub use markdown::MarkdownRenderer;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
