//! Backup commands: take a backup now, list existing ones.

use std::path::Path;

use tickets_lib::{create_backup, sorted_backups};

use super::print_json;
use crate::Result;
use crate::config::Config;
use crate::format::{BackupView, format_backup_line};

/// Execute the backup command.
///
/// Unlike the automatic backups taken before mutations, failure here is
/// reported.
///
/// # Errors
///
/// Returns an error if the tickets file cannot be read or the backup
/// cannot be written.
pub fn execute(config: &Config) -> Result<()> {
    let fs = config.filesystem();
    let created = create_backup(&*fs)?;

    if config.json {
        let name = created
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        return print_json(&serde_json::json!({ "backup": name }));
    }
    if !config.quiet {
        match created {
            Some(path) => println!("Created backup {}", path.display()),
            None => println!("Nothing to back up: no tickets file yet."),
        }
    }
    Ok(())
}

/// Execute the backups command, newest first.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved.
pub fn list(config: &Config) -> Result<()> {
    let fs = config.filesystem();
    let backups = sorted_backups(&*fs)?;

    if config.json {
        let views: Vec<BackupView> = backups.into_iter().map(BackupView::from).collect();
        return print_json(&views);
    }
    if backups.is_empty() {
        println!("No backups found.");
    } else {
        for backup in &backups {
            println!("{}", format_backup_line(backup));
        }
    }
    Ok(())
}
