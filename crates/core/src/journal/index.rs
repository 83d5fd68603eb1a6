//! The per-journal document index.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::date::DateKey;
use super::error::JournalError;
use super::types::{IndexSnapshot, JournalOptions, RenderedDocument, SearchResult};
use super::walker::JournalWalker;
use super::writer::EntryWriter;
use crate::markdown::MarkdownRenderer;

#[derive(Debug)]
enum IndexState {
    Unpopulated,
    Populated(Arc<IndexSnapshot>),
}

/// Index of the date-named entries under one journal root.
///
/// Construction does not touch the filesystem. The first query walks the
/// tree and caches the result; later queries reuse it until [`Journal::refresh`]
/// swaps in a new snapshot. A `Journal` can be shared between threads.
#[derive(Debug)]
pub struct Journal {
    root: PathBuf,
    options: JournalOptions,
    renderer: MarkdownRenderer,
    state: RwLock<IndexState>,
}

impl Journal {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, JournalOptions::default(), MarkdownRenderer::new())
    }

    pub fn with_options(
        root: impl Into<PathBuf>,
        options: JournalOptions,
        renderer: MarkdownRenderer,
    ) -> Self {
        Self { root: root.into(), options, renderer, state: RwLock::new(IndexState::Unpopulated) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &JournalOptions {
        &self.options
    }

    pub fn is_populated(&self) -> bool {
        matches!(*self.read_state(), IndexState::Populated(_))
    }

    /// The cached index, walking the journal first if nothing is cached yet.
    ///
    /// Concurrent first callers wait for a single walk.
    pub fn snapshot(&self) -> Result<Arc<IndexSnapshot>, JournalError> {
        {
            let state = self.read_state();
            if let IndexState::Populated(snapshot) = &*state {
                return Ok(Arc::clone(snapshot));
            }
        }

        let mut state = self.write_state();
        if let IndexState::Populated(snapshot) = &*state {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = Arc::new(self.populate()?);
        *state = IndexState::Populated(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Re-walk the journal and replace the cached index.
    ///
    /// Callers still holding the previous snapshot keep seeing it. If the walk
    /// fails the cached index is left as it was.
    pub fn refresh(&self) -> Result<Arc<IndexSnapshot>, JournalError> {
        let snapshot = Arc::new(self.populate()?);
        *self.write_state() = IndexState::Populated(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Every known entry date, newest first.
    pub fn search(&self) -> Result<SearchResult, JournalError> {
        let snapshot = self.snapshot()?;

        Ok(SearchResult {
            count: snapshot.len(),
            journal: self.root.display().to_string(),
            results: snapshot.entries().iter().map(|d| d.date_key.to_string()).collect(),
            warnings: snapshot.warnings().to_vec(),
        })
    }

    /// Render the entry for the first date found in `query`.
    ///
    /// Returns `Ok(None)` when `query` holds no date (the index is not
    /// touched) or when no entry exists for that date (no file is read).
    pub fn find_by_date(&self, query: &str) -> Result<Option<RenderedDocument>, JournalError> {
        let Some(key) = DateKey::find_in(query) else {
            tracing::debug!(query, "no date in lookup query");
            return Ok(None);
        };

        let snapshot = self.snapshot()?;
        let Some(path) = snapshot.path_for(&key) else {
            tracing::debug!(date = %key, "no journal entry for date");
            return Ok(None);
        };

        let raw = fs::read_to_string(path)
            .map_err(|e| JournalError::Read { path: path.display().to_string(), source: e })?;
        let rendered = self.renderer.render(&raw)?;

        tracing::debug!(date = %key, path = %path.display(), "rendered journal entry");
        Ok(Some(RenderedDocument { html: rendered.html, raw: rendered.raw, date_key: key }))
    }

    /// Write an entry to its canonical location under this journal.
    ///
    /// The cached index is not updated; call [`Journal::refresh`] to pick up
    /// a newly created entry.
    pub fn save_entry(&self, date: &str, contents: &str) -> Result<PathBuf, JournalError> {
        EntryWriter::save(&self.root, date, contents)
    }

    fn populate(&self) -> Result<IndexSnapshot, JournalError> {
        let walker = JournalWalker::new(&self.root, self.options.clone())?;
        let outcome = walker.walk();
        let snapshot = IndexSnapshot::from_walk(outcome.documents, outcome.warnings);

        tracing::debug!(
            root = %self.root.display(),
            entries = snapshot.len(),
            "populated journal index"
        );
        Ok(snapshot)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_construction_does_not_touch_filesystem() {
        let journal = Journal::new("/nonexistent/journal");
        assert!(!journal.is_populated());
        assert_eq!(journal.root(), Path::new("/nonexistent/journal"));
    }

    #[test]
    fn test_missing_root_is_an_error_not_an_empty_index() {
        let journal = Journal::new("/nonexistent/journal");
        assert!(matches!(journal.search().unwrap_err(), JournalError::MissingRoot(_)));
        assert!(!journal.is_populated());
    }

    #[test]
    fn test_search_populates_once() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020-01-01.md", "a");

        let journal = Journal::new(dir.path());
        let first = journal.snapshot().unwrap();
        write(dir.path(), "2020-01-02.md", "b");
        let second = journal.snapshot().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_refresh_sees_new_files_and_keeps_old_snapshot() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020-01-01.md", "a");

        let journal = Journal::new(dir.path());
        let before = journal.snapshot().unwrap();
        write(dir.path(), "2020-01-02.md", "b");
        let after = journal.refresh().unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(journal.search().unwrap().results, vec!["2020-01-02", "2020-01-01"]);
    }

    #[test]
    fn test_failed_refresh_keeps_cached_index() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("journal");
        write(&root, "2020-01-01.md", "a");

        let journal = Journal::new(&root);
        journal.snapshot().unwrap();
        fs::remove_dir_all(&root).unwrap();

        assert!(journal.refresh().is_err());
        assert_eq!(journal.search().unwrap().count, 1);
    }

    #[test]
    fn test_find_by_date_renders_entry() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020/01/2020-01-02.md", "# Title\n\nHello **world**");

        let journal = Journal::new(dir.path());
        let doc = journal.find_by_date("2020-01-02").unwrap().unwrap();

        assert_eq!(doc.date_key.as_str(), "2020-01-02");
        assert_eq!(doc.raw, "# Title\n\nHello **world**");
        assert!(doc.html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_find_by_date_extracts_date_from_query() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020-01-02.md", "hi");

        let journal = Journal::new(dir.path());
        let doc = journal.find_by_date("/entries/2020-01-02.json").unwrap().unwrap();
        assert_eq!(doc.date_key.as_str(), "2020-01-02");
    }

    #[test]
    fn test_query_without_date_leaves_index_untouched() {
        let journal = Journal::new("/nonexistent/journal");

        assert!(journal.find_by_date("yesterday-ish").unwrap().is_none());
        assert!(!journal.is_populated());
    }

    #[test]
    fn test_render_failure_does_not_poison_index() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020-01-01.md", "fine");
        fs::write(dir.path().join("2020-01-02.md"), [0xff, 0xfe, 0x00]).unwrap();

        let journal = Journal::new(dir.path());
        let err = journal.find_by_date("2020-01-02").unwrap_err();
        assert!(matches!(err, JournalError::Read { .. }));

        assert_eq!(journal.search().unwrap().count, 2);
        assert!(journal.find_by_date("2020-01-01").unwrap().is_some());
    }

    #[test]
    fn test_concurrent_first_access() {
        let dir = TempDir::new().unwrap();
        for day in 1..=9 {
            write(dir.path(), &format!("2020-01-0{day}.md"), "x");
        }

        let journal = Arc::new(Journal::new(dir.path()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let journal = Arc::clone(&journal);
                thread::spawn(move || journal.snapshot().unwrap())
            })
            .collect();

        let snapshots: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(snapshots.iter().all(|s| Arc::ptr_eq(s, &snapshots[0])));
        assert_eq!(snapshots[0].len(), 9);
    }

    #[test]
    fn test_save_entry_needs_refresh_to_show_up() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020-01-01.md", "a");

        let journal = Journal::new(dir.path());
        assert_eq!(journal.search().unwrap().count, 1);

        let path = journal.save_entry("2021-06-07", "# New").unwrap();
        assert!(path.ends_with("2021/06/2021-06-07.md"));
        assert!(journal.find_by_date("2021-06-07").unwrap().is_none());

        journal.refresh().unwrap();
        let doc = journal.find_by_date("2021-06-07").unwrap().unwrap();
        assert_eq!(doc.raw, "# New");
    }
}
