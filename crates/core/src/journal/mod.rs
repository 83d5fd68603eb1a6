//! Journal discovery, indexing and lookup.
//!
//! A journal is a directory tree of markdown entries named by date
//! (`2019/11/2019-11-14.md`). [`Journal`] walks it once, keeps the entries
//! sorted newest first, and renders a single entry on request.
//!
//! # Example
//!
//! ```no_run
//! use chronicles_core::journal::Journal;
//!
//! let journal = Journal::new("/home/me/notes/chronicles");
//!
//! let listing = journal.search().unwrap();
//! println!("{} entries", listing.count);
//!
//! if let Some(doc) = journal.find_by_date("2019-11-14").unwrap() {
//!     println!("{}", doc.html);
//! }
//! ```

pub mod date;
pub mod error;
pub mod index;
pub mod types;
pub mod walker;
pub mod writer;

pub use date::DateKey;
pub use error::JournalError;
pub use index::Journal;
pub use types::{
    DocumentRef, IndexSnapshot, JournalOptions, MatchMode, RenderedDocument, SearchResult,
    WalkWarning,
};
pub use walker::{JournalWalker, WalkOutcome};
pub use writer::EntryWriter;
