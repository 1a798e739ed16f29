//! Add command implementation.

use tickets_lib::TicketStore;

use super::print_json;
use crate::Result;
use crate::cli::AddArgs;
use crate::config::Config;
use crate::format::{TicketView, format_ticket_line};
use crate::validation::TicketValidator;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the title or URL is blank, the URL is already
/// tracked, or the tickets file cannot be written.
pub fn execute(args: &AddArgs, config: &Config) -> Result<()> {
    let title = args.title.join(" ");
    let title = title.trim();
    let url = args.url.trim();

    let mut store = TicketStore::load(config.filesystem());
    TicketValidator::validate_new(&store, title, url)?;

    let ticket = store.add_ticket(title, url).clone();
    store.save()?;
    tracing::debug!(id = ticket.id, "Added ticket");

    if config.json {
        print_json(&TicketView::from(&ticket))?;
    } else if !config.quiet {
        println!("Added ticket:\n{}", format_ticket_line(&ticket));
    }
    Ok(())
}
