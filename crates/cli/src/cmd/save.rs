//! Save command implementation.

use std::io::Read;

use chronicles_core::config::types::ResolvedConfig;

use super::{EXIT_FAILURE, EXIT_INPUT, exit_with, open_journal, resolve_date_arg};
use crate::SaveArgs;

pub fn run(rc: &ResolvedConfig, args: &SaveArgs, verbose: bool) {
    let date = resolve_date_arg(&args.date);

    let contents = match &args.file {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(EXIT_INPUT);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(EXIT_FAILURE);
            }
            buf
        }
    };

    let journal = open_journal(rc);
    match journal.save_entry(&date, &contents) {
        Ok(path) => println!("Saved {date} to {}", path.display()),
        Err(e) => exit_with(&e, verbose),
    }
}
