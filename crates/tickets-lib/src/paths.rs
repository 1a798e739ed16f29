//! Fixed locations of the persisted store and its backups.

use std::path::PathBuf;

use crate::error::{Result, TicketsError};
use crate::fs::FileSystem;

/// Data directory name under the user's home directory.
pub const DATA_DIR_NAME: &str = ".gotickets";

/// Primary store file name inside the data directory.
pub const TICKETS_FILE_NAME: &str = "tickets.json";

/// Backup file names start with this prefix...
pub const BACKUP_PREFIX: &str = "tickets_backup_";

/// ...and end with this suffix.
pub const BACKUP_SUFFIX: &str = ".json";

/// `chrono` format of the timestamp embedded in backup names.
///
/// Fixed width, so names sort lexically in chronological order.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<home>/.gotickets`
///
/// # Errors
///
/// Returns `HomeDir` if the home directory cannot be resolved.
pub fn data_dir(fs: &dyn FileSystem) -> Result<PathBuf> {
    let home = fs.home_dir().map_err(TicketsError::HomeDir)?;
    Ok(home.join(DATA_DIR_NAME))
}

/// `<home>/.gotickets/tickets.json`
///
/// # Errors
///
/// Returns `HomeDir` if the home directory cannot be resolved.
pub fn tickets_path(fs: &dyn FileSystem) -> Result<PathBuf> {
    Ok(data_dir(fs)?.join(TICKETS_FILE_NAME))
}

/// Whether `name` follows the `tickets_backup_*.json` naming pattern.
#[must_use]
pub fn is_backup_name(name: &str) -> bool {
    name.starts_with(BACKUP_PREFIX) && name.ends_with(BACKUP_SUFFIX)
}
