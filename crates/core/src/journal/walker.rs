//! Recursive journal directory walker.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::date::DateKey;
use super::error::JournalError;
use super::types::{DocumentRef, JournalOptions, MatchMode, WalkWarning};

/// Everything one walk found.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Candidate entries in walk order.
    pub documents: Vec<DocumentRef>,
    /// Entries that could not be read and were skipped.
    pub warnings: Vec<WalkWarning>,
}

/// Walker for discovering date-named entries in a journal.
#[derive(Debug)]
pub struct JournalWalker {
    root: PathBuf,
    options: JournalOptions,
}

impl JournalWalker {
    /// Create a walker for `root`, which must be an existing directory.
    pub fn new(root: &Path, options: JournalOptions) -> Result<Self, JournalError> {
        if !root.is_dir() {
            return Err(JournalError::MissingRoot(root.display().to_string()));
        }

        let root = std::path::absolute(root)
            .map_err(|_| JournalError::MissingRoot(root.display().to_string()))?;

        Ok(Self { root, options })
    }

    /// Walk the journal.
    ///
    /// Unreadable directories and broken links are recorded as warnings and
    /// skipped; the rest of the tree is still walked. Siblings are visited in
    /// file name order so the result is deterministic.
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.root).display().to_string();
                    outcome.warnings.push(self.warn(path, e.to_string()));
                    continue;
                }
            };

            let path = entry.path();
            let is_file = if entry.path_is_symlink() {
                match fs::metadata(path) {
                    Ok(meta) => meta.is_file(),
                    Err(e) => {
                        outcome.warnings.push(self.warn(path.display().to_string(), e.to_string()));
                        continue;
                    }
                }
            } else {
                entry.file_type().is_file()
            };

            if !is_file {
                continue;
            }

            if let Some(date_key) = self.match_entry(&entry) {
                outcome.documents.push(DocumentRef { path: path.to_path_buf(), date_key });
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            documents = outcome.documents.len(),
            warnings = outcome.warnings.len(),
            "walked journal"
        );

        outcome
    }

    fn match_entry(&self, entry: &walkdir::DirEntry) -> Option<DateKey> {
        match self.options.match_mode {
            MatchMode::FileName => DateKey::from_file_name(entry.file_name().to_str()?),
            MatchMode::FullPath => DateKey::from_full_path(&entry.path().to_string_lossy()),
        }
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        if self.options.skip_hidden && name.starts_with('.') {
            return true;
        }

        entry.file_type().is_dir()
            && self.options.excluded_dirs.iter().any(|excluded| **excluded == *name)
    }

    fn warn(&self, path: String, message: String) -> WalkWarning {
        tracing::warn!(path = %path, error = %message, "skipping unreadable journal path");
        WalkWarning { path, message }
    }

    /// Get the journal root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
