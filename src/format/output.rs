use chrono::NaiveDateTime;
use serde::Serialize;
use tickets_lib::{BackupName, ImportResult, Ticket};

/// Ticket with its derived number for list/search views.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView<'a> {
    #[serde(flatten)]
    pub ticket: &'a Ticket,
    pub number: String,
    pub display_title: String,
}

impl<'a> From<&'a Ticket> for TicketView<'a> {
    fn from(ticket: &'a Ticket) -> Self {
        Self {
            ticket,
            number: ticket.extract_ticket_number(),
            display_title: ticket.display_title(),
        }
    }
}

/// Result of `tk import`.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    #[serde(flatten)]
    pub result: ImportResult,
    pub saved: bool,
    /// Set when the import stopped early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted: Option<String>,
}

/// Backup entry for `tk backups`.
#[derive(Debug, Clone, Serialize)]
pub struct BackupView {
    pub name: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl From<BackupName> for BackupView {
    fn from(backup: BackupName) -> Self {
        Self {
            name: backup.name,
            timestamp: backup.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_ticket_view_flattens_ticket() {
        let ticket = Ticket {
            id: 3,
            title: "Login broken".to_string(),
            url: "https://jira.example.com/browse/ABC-77".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(TicketView::from(&ticket)).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["url"], "https://jira.example.com/browse/ABC-77");
        assert_eq!(value["number"], "77");
        assert_eq!(value["display_title"], "SCR #77 - Login broken");
    }

    #[test]
    fn test_import_summary_omits_missing_abort() {
        let summary = ImportSummary {
            result: ImportResult {
                added: 2,
                ..ImportResult::default()
            },
            saved: true,
            aborted: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["added"], 2);
        assert_eq!(value["saved"], true);
        assert!(value.get("aborted").is_none());
    }
}
