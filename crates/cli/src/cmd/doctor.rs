use chronicles_core::config::loader::{ConfigError, default_config_path};
use chronicles_core::config::types::ResolvedConfig;
use std::path::Path;

use super::open_journal;

pub fn run(config: Option<&Path>, rc: &ResolvedConfig) {
    println!("OK   chron doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("journal_root: {}", rc.journal_root.display());
    println!("excluded_dirs: {}", rc.journal.excluded_dirs.join(", "));
    println!("match_mode: {:?}", rc.journal.match_mode);
    println!("skip_hidden: {}", rc.journal.skip_hidden);
    println!("render.allow_raw_html: {}", rc.render.allow_raw_html);
    println!("logging.level: {}", rc.logging.level);

    let journal = open_journal(rc);
    match journal.search() {
        Ok(result) => {
            println!("entries: {}", result.count);
            if let (Some(newest), Some(oldest)) = (result.results.first(), result.results.last())
            {
                println!("newest: {newest}");
                println!("oldest: {oldest}");
            }
            println!("skipped paths: {}", result.warnings.len());
        }
        Err(e) => {
            println!("FAIL journal");
            println!("{e}");
            std::process::exit(1);
        }
    }
}

pub fn report_config_failure(config: Option<&Path>, err: &ConfigError) -> ! {
    println!("FAIL chron doctor");
    println!("{err}");
    if config.is_none() {
        println!("looked for: {}", default_config_path().display());
    }
    std::process::exit(1);
}
