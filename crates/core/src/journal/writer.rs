//! Writing entries to their canonical location.

use std::fs;
use std::path::{Path, PathBuf};

use super::date::DateKey;
use super::error::JournalError;

/// Places entries at `<root>/YYYY/MM/YYYY-MM-DD.md`.
///
/// There is a single writer; no locking or backups are performed.
pub struct EntryWriter;

impl EntryWriter {
    pub fn entry_path(root: &Path, key: &DateKey) -> PathBuf {
        root.join(key.year()).join(key.month()).join(format!("{key}.md"))
    }

    /// Write `contents` for `date`, replacing any existing entry.
    pub fn save(root: &Path, date: &str, contents: &str) -> Result<PathBuf, JournalError> {
        let key =
            DateKey::parse_strict(date).ok_or_else(|| JournalError::InvalidDate(date.to_string()))?;

        if contents.trim().is_empty() {
            return Err(JournalError::EmptyContent);
        }

        if !root.is_dir() {
            return Err(JournalError::MissingRoot(root.display().to_string()));
        }

        let path = Self::entry_path(root, &key);
        let write_err =
            |e: std::io::Error| JournalError::Write { path: path.display().to_string(), source: e };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&path, contents).map_err(write_err)?;

        tracing::info!(date = %key, path = %path.display(), "saved journal entry");
        Ok(path)
    }
}
