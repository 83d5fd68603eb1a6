//! Search command implementation.

use chronicles_core::config::types::ResolvedConfig;
use chronicles_core::journal::SearchResult;

use super::{exit_with, open_journal, print_json};
use crate::SearchArgs;

pub fn run(rc: &ResolvedConfig, args: &SearchArgs, verbose: bool) {
    let journal = open_journal(rc);
    let result = match journal.search() {
        Ok(result) => result,
        Err(e) => exit_with(&e, verbose),
    };

    if args.json {
        print_json(&result);
    } else {
        print_results(&result, verbose);
    }
}

fn print_results(result: &SearchResult, verbose: bool) {
    for date in &result.results {
        println!("{date}");
    }
    println!("-- {} entries --", result.count);

    if !result.warnings.is_empty() {
        eprintln!("warning: {} unreadable paths were skipped", result.warnings.len());
        if verbose {
            for w in &result.warnings {
                eprintln!("  {}: {}", w.path, w.message);
            }
        }
    }
}
