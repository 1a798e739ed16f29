//! Error types for `tickets-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for ticket storage operations.
#[derive(Error, Debug)]
pub enum TicketsError {
    // === Ticket Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {}", join_errors(.errors))]
    ValidationErrors { errors: Vec<ValidationError> },

    /// A ticket with this URL is already tracked.
    #[error("A ticket with this URL already exists: {url}")]
    DuplicateUrl { url: String },

    /// Ticket with the specified ID was not found.
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: u64 },

    // === Location Errors ===
    /// The user's home directory could not be resolved.
    #[error("could not resolve home directory: {0}")]
    HomeDir(#[source] std::io::Error),

    // === Backup Errors ===
    /// Reading the primary file while taking a backup failed.
    #[error("failed to read tickets file for backup: {0}")]
    BackupRead(#[source] std::io::Error),

    /// Writing the backup copy failed.
    #[error("failed to create backup: {0}")]
    BackupWrite(#[source] std::io::Error),

    /// The named backup does not exist in the data directory.
    #[error("backup file not found: {name}")]
    BackupNotFound { name: String },

    /// The name is not a plain `tickets_backup_*.json` file name.
    #[error("invalid backup file name: {name}")]
    InvalidBackupName { name: String },

    /// The named backup exists but could not be read.
    #[error("failed to read backup file: {0}")]
    BackupUnreadable(#[source] std::io::Error),

    /// The named backup is not a valid tickets document.
    #[error("backup file is corrupted: {0}")]
    BackupCorrupted(#[source] serde_json::Error),

    /// Overwriting the primary file with the backup failed.
    #[error("failed to restore from backup: {0}")]
    RestoreWrite(#[source] std::io::Error),

    // === Import Errors ===
    /// The import file could not be opened.
    #[error("failed to open import file {}: {source}", path.display())]
    ImportOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading the import file failed partway through.
    #[error("failed to read import file at line {line}: {source}")]
    ImportRead { line: usize, source: std::io::Error },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TicketsError {
    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// Whether the underlying cause is a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::BackupNotFound { .. } | Self::TicketNotFound { .. } => true,
            Self::HomeDir(e)
            | Self::BackupRead(e)
            | Self::BackupWrite(e)
            | Self::BackupUnreadable(e)
            | Self::RestoreWrite(e)
            | Self::Io(e)
            | Self::ImportOpen { source: e, .. }
            | Self::ImportRead { source: e, .. } => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type using `TicketsError`.
pub type Result<T> = std::result::Result<T, TicketsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_fields() {
        let err = TicketsError::from_validation_errors(vec![
            ValidationError::new("url", "cannot be empty"),
            ValidationError::new("title", "cannot be empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation errors: url: cannot be empty; title: cannot be empty"
        );
    }

    #[test]
    fn test_single_validation_error_collapses() {
        let err = TicketsError::from_validation_errors(vec![ValidationError::new(
            "title",
            "cannot be empty",
        )]);
        assert_eq!(err.to_string(), "Validation failed: title: cannot be empty");
    }
}
