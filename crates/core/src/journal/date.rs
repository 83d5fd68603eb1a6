//! Date keys and the patterns that find them.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Serialize, Serializer};

/// `YYYY-MM-DD` anywhere in a string.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

/// A file name that is exactly `YYYY-MM-DD.md`.
static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})\.md$").unwrap());

/// `YYYY-MM-DD.md` anywhere in a path string.
static FULL_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})\.md").unwrap());

/// An ISO `YYYY-MM-DD` token identifying a journal entry.
///
/// Only the shape is checked; `2020-13-45` is a valid key. Digits are ASCII
/// `0-9`, so a key is always ten bytes and the year and month sit at fixed
/// offsets. Keys order lexically, which for zero-padded dates is
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// First date-shaped substring of `input`, if any.
    pub fn find_in(input: &str) -> Option<Self> {
        DATE_RE.find(input).map(|m| Self(m.as_str().to_string()))
    }

    /// Key for a file named exactly `YYYY-MM-DD.md`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        FILE_NAME_RE.captures(name).map(|c| Self(c[1].to_string()))
    }

    /// Key from the first `YYYY-MM-DD.md` found anywhere in `path`,
    /// including directory segments.
    pub fn from_full_path(path: &str) -> Option<Self> {
        FULL_PATH_RE.captures(path).map(|c| Self(c[1].to_string()))
    }

    /// Parse a string that must be exactly `YYYY-MM-DD` and a real date.
    pub fn parse_strict(input: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
        let key = Self::from(date);
        (key.as_str() == input).then_some(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> &str {
        &self.0[..4]
    }

    pub fn month(&self) -> &str {
        &self.0[5..7]
    }

    /// The calendar date, when the key names one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
