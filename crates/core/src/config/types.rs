use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::journal::{JournalOptions, MatchMode};
use crate::markdown::RenderOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub journal_root: String,
    /// Directory names skipped while walking (default: `attachments`).
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub skip_hidden: bool,
}

fn default_excluded_dirs() -> Vec<String> {
    JournalOptions::default().excluded_dirs
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub journal_root: PathBuf,
    pub journal: JournalOptions,
    pub render: RenderOptions,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Defaults for a journal given directly, without a config file.
    pub fn for_journal(root: impl Into<PathBuf>) -> Self {
        Self {
            active_profile: "(command line)".to_string(),
            journal_root: root.into(),
            journal: JournalOptions::default(),
            render: RenderOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}
