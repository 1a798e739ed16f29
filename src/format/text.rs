//! Plain text formatting for terminal output.

use tickets_lib::{BackupName, ImportResult, Ticket};

/// Format a ticket as two lines.
///
/// Format: `{id:>4}  SCR #{number} - {title}` then the URL, indented.
#[must_use]
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{:>4}  {}\n      {}",
        ticket.id,
        ticket.display_title(),
        ticket.description()
    )
}

/// Format a backup entry: name, then its timestamp when it parses.
#[must_use]
pub fn format_backup_line(backup: &BackupName) -> String {
    match backup.timestamp {
        Some(ts) => format!("{}  ({})", backup.name, ts.format("%Y-%m-%d %H:%M:%S")),
        None => backup.name.clone(),
    }
}

/// Summary printed after an import run.
#[must_use]
pub fn format_import_summary(result: &ImportResult) -> String {
    let mut out = format!(
        "Imported {} ticket(s), {} duplicate(s) skipped, {} error(s)",
        result.added, result.duplicates, result.errors
    );
    for line in &result.error_lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}
