//! Show command implementation.

use chronicles_core::config::types::ResolvedConfig;
use chronicles_core::journal::DateKey;

use super::{EXIT_FAILURE, EXIT_INPUT, exit_with, open_journal, print_json, resolve_date_arg};
use crate::ShowArgs;

pub fn run(rc: &ResolvedConfig, args: &ShowArgs, verbose: bool) {
    let query = resolve_date_arg(&args.date);
    if DateKey::find_in(&query).is_none() {
        eprintln!("Error: expected a date like YYYY-MM-DD, got '{}'", args.date);
        std::process::exit(EXIT_INPUT);
    }

    let journal = open_journal(rc);
    let doc = match journal.find_by_date(&query) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            eprintln!("Error: entry not found: {query}");
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => exit_with(&e, verbose),
    };

    if args.json {
        print_json(&doc);
    } else if args.raw {
        print!("{}", doc.raw);
        if !doc.raw.ends_with('\n') {
            println!();
        }
    } else {
        print!("{}", doc.html);
    }
}
