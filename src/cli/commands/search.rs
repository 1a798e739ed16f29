//! Search command implementation.

use tickets_lib::TicketStore;

use super::list::print_tickets;
use crate::Result;
use crate::cli::SearchArgs;
use crate::config::Config;

/// Execute the search command.
///
/// Matches the query case-insensitively against titles and URLs.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &SearchArgs, config: &Config) -> Result<()> {
    let store = TicketStore::load(config.filesystem());
    let matches = store.search(&args.query);
    tracing::debug!(query = %args.query, hits = matches.len(), "Searched tickets");
    print_tickets(&matches, config.json)
}
