//! Timestamped backups of `tickets.json`.
//!
//! This module handles:
//! - Copying the primary file to `tickets_backup_<timestamp>.json` before mutations
//! - Listing the backups in the data directory
//! - Restoring the primary file from a chosen backup
//!
//! Backups live next to the primary file and are byte-identical copies of it.

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::error::{Result, TicketsError};
use crate::fs::FileSystem;
use crate::model::TicketsDocument;
use crate::paths::{
    BACKUP_PREFIX, BACKUP_SUFFIX, BACKUP_TIMESTAMP_FORMAT, TICKETS_FILE_NAME, data_dir,
    is_backup_name,
};

/// File name for a backup taken at `timestamp`.
#[must_use]
pub fn backup_file_name(timestamp: &NaiveDateTime) -> String {
    format!(
        "{BACKUP_PREFIX}{}{BACKUP_SUFFIX}",
        timestamp.format(BACKUP_TIMESTAMP_FORMAT)
    )
}

/// Copy the primary file to a new timestamped backup.
///
/// Returns the backup path, or `None` when there is no primary file yet
/// (nothing to protect).
///
/// # Errors
///
/// Returns `HomeDir` if the home directory cannot be resolved, `BackupRead`
/// if the primary file cannot be read, or `BackupWrite` if the copy cannot
/// be written.
pub fn create_backup(fs: &dyn FileSystem) -> Result<Option<PathBuf>> {
    let dir = data_dir(fs)?;
    let primary = dir.join(TICKETS_FILE_NAME);

    if let Err(e) = fs.metadata(&primary) {
        if e.kind() == ErrorKind::NotFound {
            return Ok(None);
        }
    }

    let backup_path = dir.join(backup_file_name(&Local::now().naive_local()));
    let data = fs.read(&primary).map_err(TicketsError::BackupRead)?;
    fs.write(&backup_path, &data)
        .map_err(TicketsError::BackupWrite)?;

    tracing::debug!("Created backup: {}", backup_path.display());
    Ok(Some(backup_path))
}

/// Names of the backups in the data directory, in directory order.
///
/// Only regular entries named `tickets_backup_*.json` are returned.
///
/// # Errors
///
/// Returns `HomeDir` if the home directory cannot be resolved, or `Io` if
/// the data directory cannot be listed (including when it does not exist).
pub fn list_backups(fs: &dyn FileSystem) -> Result<Vec<String>> {
    let dir = data_dir(fs)?;
    let entries = fs.read_dir(&dir)?;

    Ok(entries
        .into_iter()
        .filter(|entry| !entry.is_dir && is_backup_name(&entry.name))
        .map(|entry| entry.name)
        .collect())
}

/// Replace the primary file with the contents of backup `name`.
///
/// The backup is parsed first purely as validation; the primary file is
/// only touched when it parses. The bytes written are the backup's raw
/// bytes. No in-memory store is refreshed: reload afterwards.
///
/// # Errors
///
/// Returns `InvalidBackupName` for names outside the backup pattern or
/// containing a path separator, `BackupNotFound` if the backup does not
/// exist, `BackupUnreadable` if it cannot be read, `BackupCorrupted` if it
/// is not a valid tickets document, or `RestoreWrite` if the primary file
/// cannot be written.
pub fn restore_from_backup(fs: &dyn FileSystem, name: &str) -> Result<()> {
    // Only plain names inside the data directory
    if !is_backup_name(name) || name.contains(['/', '\\']) {
        return Err(TicketsError::InvalidBackupName {
            name: name.to_string(),
        });
    }

    let dir = data_dir(fs)?;
    let backup_path = dir.join(name);
    let primary = dir.join(TICKETS_FILE_NAME);

    if let Err(e) = fs.metadata(&backup_path) {
        if e.kind() == ErrorKind::NotFound {
            return Err(TicketsError::BackupNotFound {
                name: name.to_string(),
            });
        }
    }

    let data = fs
        .read(&backup_path)
        .map_err(TicketsError::BackupUnreadable)?;
    serde_json::from_slice::<TicketsDocument>(&data).map_err(TicketsError::BackupCorrupted)?;
    fs.write(&primary, &data)
        .map_err(TicketsError::RestoreWrite)?;

    tracing::debug!("Restored {} from {}", primary.display(), name);
    Ok(())
}

// ============================================================================
// Chronological listing
// ============================================================================

/// A backup name with its embedded timestamp parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupName {
    pub name: String,
    /// `None` when the name matches the pattern but the timestamp doesn't parse.
    pub timestamp: Option<NaiveDateTime>,
}

impl BackupName {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let timestamp = name
            .strip_prefix(BACKUP_PREFIX)
            .and_then(|rest| rest.strip_suffix(BACKUP_SUFFIX))
            .and_then(|ts| NaiveDateTime::parse_from_str(ts, BACKUP_TIMESTAMP_FORMAT).ok());
        Self {
            name: name.to_string(),
            timestamp,
        }
    }
}

/// Backups sorted newest first. Names whose timestamp doesn't parse go last.
///
/// # Errors
///
/// Same as [`list_backups`].
pub fn sorted_backups(fs: &dyn FileSystem) -> Result<Vec<BackupName>> {
    let mut backups: Vec<BackupName> = list_backups(fs)?
        .iter()
        .map(|name| BackupName::parse(name))
        .collect();

    // Option orders None first, so reverse puts unparsable names last
    backups.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.name.cmp(&a.name))
    });
    Ok(backups)
}
