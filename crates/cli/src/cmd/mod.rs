pub mod doctor;
pub mod save;
pub mod search;
pub mod show;

use std::path::Path;

use chrono::{Days, Local};
use chronicles_core::config::loader::{ConfigError, ConfigLoader};
use chronicles_core::config::types::ResolvedConfig;
use chronicles_core::journal::{Journal, JournalError};
use chronicles_core::markdown::MarkdownRenderer;
use serde::Serialize;

/// Exit code for requests that were malformed.
pub const EXIT_INPUT: i32 = 2;
/// Exit code for not-found and filesystem or render failures.
pub const EXIT_FAILURE: i32 = 1;

/// Load the config, letting `--journal` stand in for a missing config file.
pub fn resolve_config(
    config: Option<&Path>,
    profile: Option<&str>,
    journal: Option<&Path>,
) -> Result<ResolvedConfig, ConfigError> {
    match (ConfigLoader::load(config, profile), journal) {
        (Ok(mut rc), Some(root)) => {
            rc.journal_root = root.to_path_buf();
            Ok(rc)
        }
        (Ok(rc), None) => Ok(rc),
        (Err(ConfigError::NotFound(_)), Some(root)) if config.is_none() => {
            Ok(ResolvedConfig::for_journal(root))
        }
        (Err(e), _) => Err(e),
    }
}

pub fn open_journal(rc: &ResolvedConfig) -> Journal {
    Journal::with_options(
        &rc.journal_root,
        rc.journal.clone(),
        MarkdownRenderer::with_options(rc.render.clone()),
    )
}

/// Expand `today` and `yesterday`; anything else is passed through.
pub fn resolve_date_arg(arg: &str) -> String {
    let today = Local::now().date_naive();
    let date = match arg.trim().to_lowercase().as_str() {
        "today" => today,
        "yesterday" => today.checked_sub_days(Days::new(1)).unwrap_or(today),
        _ => return arg.trim().to_string(),
    };
    date.format("%Y-%m-%d").to_string()
}

/// Print `value` as pretty JSON, exiting with a failure if it cannot be
/// serialized.
pub fn print_json<T: Serialize>(value: &T) {
    match to_json(value) {
        Ok(json) => println!("{json}"),
        Err(msg) => {
            eprintln!("Error: {msg}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize output: {e}"))
}

/// Report a journal error and exit.
///
/// Filesystem and render failures print a generic message unless
/// `verbose` is set.
pub fn exit_with(err: &JournalError, verbose: bool) -> ! {
    tracing::debug!(error = %err, "command failed");
    if verbose || err.is_input_error() {
        eprintln!("Error: {err}");
    } else {
        eprintln!("Error: {}", err.public_message());
    }

    let code = if err.is_input_error() { EXIT_INPUT } else { EXIT_FAILURE };
    std::process::exit(code);
}
