//! Bulk import of tickets from a line-oriented text file.
//!
//! One ticket per line, `<url> - <title>`. Blank lines are skipped. There
//! is no escaping, so a literal `" - "` inside a URL cannot be imported.

use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::error::TicketsError;
use crate::store::TicketStore;

/// Separator between URL and title on an import line.
pub const IMPORT_SEPARATOR: &str = " - ";

/// Outcome counts of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub added: usize,
    pub duplicates: usize,
    pub errors: usize,
    /// One message per malformed line, in file order.
    pub error_lines: Vec<String>,
}

impl ImportResult {
    fn record_error(&mut self, message: String) {
        self.errors += 1;
        self.error_lines.push(message);
    }
}

/// An import that stopped early, with whatever was accumulated before.
///
/// `partial` is zeroed when the file could not be opened, and holds the
/// lines processed so far when reading failed midway.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct ImportError {
    pub partial: ImportResult,
    pub cause: TicketsError,
}

/// Why a single line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// No `" - "` separator.
    InvalidFormat,
    /// URL or title is empty after trimming.
    EmptyField,
}

impl LineError {
    /// Message recorded in [`ImportResult::error_lines`].
    #[must_use]
    pub fn message(self, line_number: usize) -> String {
        match self {
            Self::InvalidFormat => format!("line {line_number}: invalid format"),
            Self::EmptyField => format!("line {line_number}: empty URL or title"),
        }
    }
}

/// Split a trimmed, non-empty line into `(url, title)`.
///
/// # Errors
///
/// Returns `InvalidFormat` without a separator, `EmptyField` if either
/// side is blank.
pub fn parse_import_line(line: &str) -> Result<(&str, &str), LineError> {
    let (url, title) = line
        .split_once(IMPORT_SEPARATOR)
        .ok_or(LineError::InvalidFormat)?;
    let (url, title) = (url.trim(), title.trim());
    if url.is_empty() || title.is_empty() {
        return Err(LineError::EmptyField);
    }
    Ok((url, title))
}

impl TicketStore {
    /// Import tickets from the file at `path`.
    ///
    /// Lines whose URL is already present count as duplicates and are
    /// skipped. Added tickets stay in memory; call [`save`](Self::save)
    /// to persist them.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] carrying `ImportOpen` (with a zeroed
    /// result) if the file cannot be opened, or `ImportRead` (with the
    /// partial result) if reading fails midway.
    pub fn import_from_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<ImportResult, ImportError> {
        let path = path.as_ref();
        self.backup_before_mutation();

        let mut result = ImportResult::default();
        let reader = match self.fs().open(path) {
            Ok(reader) => reader,
            Err(source) => {
                return Err(ImportError {
                    partial: result,
                    cause: TicketsError::ImportOpen {
                        path: path.to_path_buf(),
                        source,
                    },
                });
            }
        };

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Err(ImportError {
                        partial: result,
                        cause: TicketsError::ImportRead {
                            line: line_number,
                            source,
                        },
                    });
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_import_line(line) {
                Ok((url, _)) if self.has_ticket_with_url(url) => result.duplicates += 1,
                Ok((url, title)) => {
                    self.add_ticket(title, url);
                    result.added += 1;
                }
                Err(e) => result.record_error(e.message(line_number)),
            }
        }

        tracing::debug!(
            added = result.added,
            duplicates = result.duplicates,
            errors = result.errors,
            "Imported {}",
            path.display()
        );
        Ok(result)
    }
}
