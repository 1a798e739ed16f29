//! Output formatting for `tickets_rust`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! JSON goes to stdout with diagnostics on stderr.
//!
//! # JSON Output Types
//!
//! - [`TicketView`] - Ticket with its derived number and display title (list/search/add)
//! - [`ImportSummary`] - Counts and per-line errors of an import run
//! - [`BackupView`] - A backup file with its parsed timestamp

mod output;
mod text;

pub use output::{BackupView, ImportSummary, TicketView};
pub use text::{format_backup_line, format_import_summary, format_ticket_line};
