//! Import command implementation.
//!
//! Reads `<url> - <title>` lines and saves once at the end, only when at
//! least one ticket was added.

use tickets_lib::{ImportResult, TicketStore};

use super::print_json;
use crate::Result;
use crate::cli::ImportArgs;
use crate::config::Config;
use crate::format::{ImportSummary, format_import_summary};

/// Execute the import command.
///
/// # Errors
///
/// Returns an error if the import file cannot be opened or read, or if
/// the tickets file cannot be written.
pub fn execute(args: &ImportArgs, config: &Config) -> Result<()> {
    let mut store = TicketStore::load(config.filesystem());

    let (result, failure) = match store.import_from_file(&args.file) {
        Ok(result) => (result, None),
        Err(e) => {
            // Shown as one more error on top of what was read
            let mut result = e.partial;
            result.errors += 1;
            result.error_lines.push(e.cause.to_string());
            (result, Some(e.cause))
        }
    };

    // Tickets read before a mid-file failure are kept
    let saved = result.added > 0;
    if saved {
        store.save()?;
    }

    report(result, saved, failure.as_ref().map(ToString::to_string), config)?;
    failure.map_or(Ok(()), Err)
}

fn report(
    result: ImportResult,
    saved: bool,
    aborted: Option<String>,
    config: &Config,
) -> Result<()> {
    if config.json {
        return print_json(&ImportSummary {
            result,
            saved,
            aborted,
        });
    }
    if !config.quiet {
        println!("{}", format_import_summary(&result));
    }
    Ok(())
}
