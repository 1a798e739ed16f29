//! Delete command implementation.

use serde_json::json;
use tickets_lib::{TicketStore, TicketsError};

use super::print_json;
use crate::Result;
use crate::cli::DeleteArgs;
use crate::config::Config;

/// Execute the delete command.
///
/// # Errors
///
/// Returns `TicketNotFound` if no ticket has the id, or an error if the
/// tickets file cannot be written.
pub fn execute(args: &DeleteArgs, config: &Config) -> Result<()> {
    let mut store = TicketStore::load(config.filesystem());
    if !store.delete_ticket(args.id) {
        return Err(TicketsError::TicketNotFound { id: args.id });
    }
    store.save()?;

    if config.json {
        print_json(&json!({ "deleted": args.id }))?;
    } else if !config.quiet {
        println!("Deleted ticket {}", args.id);
    }
    Ok(())
}
