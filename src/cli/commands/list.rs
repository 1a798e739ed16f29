//! List command implementation.

use tickets_lib::{Ticket, TicketStore};

use super::print_json;
use crate::Result;
use crate::config::Config;
use crate::format::{TicketView, format_ticket_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(config: &Config) -> Result<()> {
    let store = TicketStore::load(config.filesystem());
    let tickets: Vec<&Ticket> = store.tickets().iter().collect();
    print_tickets(&tickets, config.json)
}

/// Print tickets in insertion order, as text or JSON.
pub(crate) fn print_tickets(tickets: &[&Ticket], json: bool) -> Result<()> {
    if json {
        let views: Vec<TicketView<'_>> = tickets.iter().map(|t| TicketView::from(*t)).collect();
        return print_json(&views);
    }

    if tickets.is_empty() {
        println!("No tickets found.");
    } else {
        for ticket in tickets {
            println!("{}", format_ticket_line(ticket));
        }
        println!("\n{} ticket(s)", tickets.len());
    }
    Ok(())
}
