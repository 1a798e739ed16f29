//! Restore command implementation.

use tickets_lib::{TicketStore, restore_from_backup};

use super::print_json;
use crate::Result;
use crate::cli::RestoreArgs;
use crate::config::Config;

/// Execute the restore command.
///
/// # Errors
///
/// Returns `InvalidBackupName` for a path-like name, `BackupNotFound` for
/// an unknown name, `BackupCorrupted` if the backup is not a valid tickets
/// document, or an error if the primary file cannot be written.
pub fn execute(args: &RestoreArgs, config: &Config) -> Result<()> {
    let fs = config.filesystem();
    restore_from_backup(&*fs, &args.name)?;
    let store = TicketStore::load(fs);
    tracing::debug!(name = %args.name, tickets = store.len(), "Restored backup");

    if config.json {
        print_json(&serde_json::json!({
            "restored": args.name,
            "tickets": store.len(),
        }))?;
    } else if !config.quiet {
        println!("Restored {} ({} ticket(s))", args.name, store.len());
    }
    Ok(())
}
