//! Core data types for tickets-lib.
//!
//! Field names match the `tickets.json` format written by earlier
//! versions, so existing files load unchanged.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A tracked link with a title.
/// Missing fields in older files fall back to zero values instead of
/// failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Ticket number extraction
// ============================================================================

// Digit classes are ASCII-only: `\d` in `regex` also matches other scripts.

/// Project key such as `ABC-123`.
static PROJECT_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]+-([0-9]+)").expect("valid regex"));

/// Digits in the last non-empty path segment.
static LAST_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*[^/]/([0-9]+)(?:[/?#].*)?$").expect("valid regex"));

/// Digits-only trailing segment, less anchored.
static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([0-9]+)(?:[/?#].*)?$").expect("valid regex"));

/// `issue/12`, `tickets=34`, `task/56` and friends. Matched against the
/// lowercased URL.
static KEYWORD_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:issue|ticket|task)(?:s)?[/=]([0-9]+)").expect("valid regex"));

/// Any run of six or more digits.
static LONG_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{6,})").expect("valid regex"));

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl Ticket {
    /// Display-friendly ticket number derived from the URL.
    ///
    /// Tries, first match wins: a project key (`ABC-123`), the digits of
    /// the final path segment, a bare trailing digit segment, an
    /// `issue`/`ticket`/`task` keyword followed by `/` or `=` and digits,
    /// any run of six or more digits. Falls back to the ticket id padded
    /// to six digits.
    #[must_use]
    pub fn extract_ticket_number(&self) -> String {
        let url = self.url.as_str();
        first_capture(&PROJECT_KEY, url)
            .or_else(|| first_capture(&LAST_SEGMENT, url))
            .or_else(|| first_capture(&TRAILING_DIGITS, url))
            .or_else(|| first_capture(&KEYWORD_NUMBER, &url.to_lowercase()))
            .or_else(|| first_capture(&LONG_NUMBER, url))
            .unwrap_or_else(|| format!("{:06}", self.id))
    }

    /// `SCR #<number> - <title>`
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("SCR #{} - {}", self.extract_ticket_number(), self.title)
    }

    /// Secondary line shown under the title in lists.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.url
    }

    /// Text matched by list filtering: title and URL.
    #[must_use]
    pub fn filter_value(&self) -> String {
        format!("{} {}", self.title, self.url)
    }
}

// ============================================================================
// Persisted document
// ============================================================================

/// On-disk shape of `tickets.json` and of every backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketsDocument {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    /// Missing in older files; zero is coerced to 1 on load.
    #[serde(default)]
    pub next_id: u64,
}

/// Borrowed view used when saving, to avoid cloning the ticket list.
#[derive(Debug, Serialize)]
pub(crate) struct TicketsDocumentRef<'a> {
    pub tickets: &'a [Ticket],
    pub next_id: u64,
}
