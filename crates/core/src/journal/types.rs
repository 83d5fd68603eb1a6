//! Data types for the journal index.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::date::DateKey;

/// How candidate documents are recognised during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The file name must be exactly `YYYY-MM-DD.md`.
    #[default]
    FileName,
    /// `YYYY-MM-DD.md` may appear anywhere in the full path, so a file inside
    /// a directory named like an entry is picked up as well.
    FullPath,
}

/// Walk settings for a journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalOptions {
    /// Directory names whose whole subtree is skipped.
    pub excluded_dirs: Vec<String>,
    pub match_mode: MatchMode,
    /// Skip files and directories whose name starts with `.`. Off by default,
    /// so entries under `.archive/` and the like are indexed.
    pub skip_hidden: bool,
}

impl Default for JournalOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: vec!["attachments".to_string()],
            match_mode: MatchMode::default(),
            skip_hidden: false,
        }
    }
}

/// A discovered entry: where it lives and which date it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Absolute path to the file.
    pub path: PathBuf,
    pub date_key: DateKey,
}

/// Something the walker could not read. The rest of the walk carried on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkWarning {
    pub path: String,
    pub message: String,
}

/// A populated index: every entry newest first, plus a date lookup.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    entries: Vec<DocumentRef>,
    by_date: HashMap<DateKey, PathBuf>,
    warnings: Vec<WalkWarning>,
}

impl IndexSnapshot {
    /// Build a snapshot from documents in walk order.
    ///
    /// When two documents share a date the one walked later wins the lookup.
    /// Both stay in `entries`.
    pub fn from_walk(documents: Vec<DocumentRef>, warnings: Vec<WalkWarning>) -> Self {
        let mut by_date = HashMap::with_capacity(documents.len());
        for doc in &documents {
            if let Some(previous) = by_date.insert(doc.date_key.clone(), doc.path.clone()) {
                tracing::warn!(
                    date = %doc.date_key,
                    kept = %doc.path.display(),
                    dropped = %previous.display(),
                    "duplicate journal entry date"
                );
            }
        }

        let mut entries = documents;
        // stable: equal keys keep walk order
        entries.sort_by(|a, b| b.date_key.cmp(&a.date_key));

        Self { entries, by_date, warnings }
    }

    /// Entries sorted by date, newest first.
    pub fn entries(&self) -> &[DocumentRef] {
        &self.entries
    }

    pub fn path_for(&self, key: &DateKey) -> Option<&Path> {
        self.by_date.get(key).map(PathBuf::as_path)
    }

    pub fn warnings(&self) -> &[WalkWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Summary of a journal's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub count: usize,
    /// The journal root that was searched.
    pub journal: String,
    /// Date keys, newest first.
    pub results: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WalkWarning>,
}

/// A single entry rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    pub raw: String,
    #[serde(rename = "date")]
    pub date_key: DateKey,
}
