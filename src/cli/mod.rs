//! Command-line interface for `tickets_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{Config, HOME_ENV};
use crate::logging;

/// `tickets_rust` (tk) - Personal ticket/bookmark tracker.
#[derive(Parser, Debug)]
#[command(name = "tk")]
#[command(
    author,
    version,
    about = "Personal ticket/bookmark tracker",
    long_about = None,
    after_help = "Data lives in ~/.gotickets/tickets.json; a backup is taken before every change."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory holding `.gotickets/` (defaults to the home directory)
    #[arg(long, global = true, env = HOME_ENV, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track a new link
    Add(AddArgs),

    /// List all tickets
    #[command(alias = "ls")]
    List,

    /// Search titles and URLs (case-insensitive)
    #[command(alias = "q")]
    Search(SearchArgs),

    /// Delete a ticket by id
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Import `<url> - <title>` lines from a text file
    Import(ImportArgs),

    /// Take a backup of the tickets file now
    Backup,

    /// List available backups, newest first
    Backups,

    /// Restore the tickets file from a backup
    Restore(RestoreArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Ticket URL
    pub url: String,

    /// Ticket title (remaining words are joined)
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (empty matches everything)
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Ticket id
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the import file
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Backup file name (as shown by `tk backups`)
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    logging::init_logging(config.verbose, config.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = cli.command else {
        println!("tk - Personal ticket tracker. Use --help for usage.");
        return Ok(());
    };

    tracing::debug!("Running {}", command.name());
    match command {
        Commands::Add(args) => commands::add::execute(&args, &config)?,
        Commands::List => commands::list::execute(&config)?,
        Commands::Search(args) => commands::search::execute(&args, &config)?,
        Commands::Delete(args) => commands::delete::execute(&args, &config)?,
        Commands::Import(args) => commands::import::execute(&args, &config)?,
        Commands::Backup => commands::backup::execute(&config)?,
        Commands::Backups => commands::backup::list(&config)?,
        Commands::Restore(args) => commands::restore::execute(&args, &config)?,
        Commands::Completions(args) => commands::completions::execute(&args),
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::List => "list",
            Self::Search(_) => "search",
            Self::Delete(_) => "delete",
            Self::Import(_) => "import",
            Self::Backup => "backup",
            Self::Backups => "backups",
            Self::Restore(_) => "restore",
            Self::Completions(_) => "completions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_title_words() {
        let cli = Cli::parse_from(["tk", "add", "https://example.com/1", "Fix", "the", "bug"]);
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.url, "https://example.com/1");
                assert_eq!(args.title.join(" "), "Fix the bug");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tk", "list", "--json", "--home", "/tmp/x"]);
        assert!(cli.json);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_search_query_defaults_to_empty() {
        let cli = Cli::parse_from(["tk", "search"]);
        match cli.command {
            Some(Commands::Search(args)) => assert!(args.query.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
