mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chron", version, about = "Browse a folder of dated markdown journal entries")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/chronicles/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Journal root; overrides the profile and makes the config file optional
    #[arg(long, short, global = true)]
    journal: Option<PathBuf>,

    /// Debug logging and detailed error messages
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print journal statistics
    Doctor,

    /// List every entry date, newest first
    Search(SearchArgs),

    /// Render the entry for a date
    Show(ShowArgs),

    /// Write an entry for a date
    Save(SaveArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// A date (YYYY-MM-DD, or any text containing one), "today" or "yesterday"
    pub date: String,

    /// Print html, raw and date as JSON
    #[arg(long, conflicts_with = "raw")]
    pub json: bool,

    /// Print the markdown source instead of HTML
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Entry date: YYYY-MM-DD, "today" or "yesterday"
    pub date: String,

    /// Read contents from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let rc = match cmd::resolve_config(
        cli.config.as_deref(),
        cli.profile.as_deref(),
        cli.journal.as_deref(),
    ) {
        Ok(rc) => rc,
        Err(e) => {
            if matches!(cli.command, Commands::Doctor) {
                cmd::doctor::report_config_failure(cli.config.as_deref(), &e);
            }
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&rc, cli.verbose);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), &rc),
        Commands::Search(args) => cmd::search::run(&rc, &args, cli.verbose),
        Commands::Show(args) => cmd::show::run(&rc, &args, cli.verbose),
        Commands::Save(args) => cmd::save::run(&rc, &args, cli.verbose),
    }
}
