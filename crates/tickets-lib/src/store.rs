//! Ticket store: the in-memory ticket list plus id sequencing.
//!
//! Provides add/search/delete over tickets kept in insertion order, and
//! persistence to `<home>/.gotickets/tickets.json` through a [`FileSystem`].
//! Every mutating call first takes a best-effort backup of the primary file.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::backup;
use crate::error::{Result, TicketsError};
use crate::fs::FileSystem;
use crate::model::{Ticket, TicketsDocument, TicketsDocumentRef};
use crate::paths::{TICKETS_FILE_NAME, data_dir, tickets_path};

/// In-memory ticket store.
///
/// Use [`load`](Self::load) to hydrate from disk and [`save`](Self::save)
/// to persist. Mutations are not saved automatically.
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: u64,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketStore")
            .field("tickets", &self.tickets)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl TicketStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
            fs,
        }
    }

    fn from_document(fs: Arc<dyn FileSystem>, doc: TicketsDocument) -> Self {
        Self {
            tickets: doc.tickets,
            // Older files lack next_id
            next_id: doc.next_id.max(1),
            fs,
        }
    }

    /// Load the store from `<home>/.gotickets/tickets.json`.
    ///
    /// Never fails: a missing home directory, missing file, unreadable
    /// file, or invalid JSON all yield an empty store.
    #[must_use]
    pub fn load(fs: Arc<dyn FileSystem>) -> Self {
        match tickets_path(fs.as_ref()) {
            Ok(path) => Self::load_from_path(fs, &path),
            Err(e) => {
                tracing::warn!("Starting with an empty store: {e}");
                Self::new(fs)
            }
        }
    }

    /// Load the store from a specific file.
    ///
    /// Same degrade-to-empty behavior as [`load`](Self::load).
    #[must_use]
    pub fn load_from_path(fs: Arc<dyn FileSystem>, path: &Path) -> Self {
        let data = match fs.read(path) {
            Ok(data) => data,
            Err(e) => {
                if e.kind() == ErrorKind::NotFound {
                    tracing::debug!("No tickets file at {}", path.display());
                } else {
                    tracing::warn!(
                        "Could not read {}; starting with an empty store: {e}",
                        path.display()
                    );
                }
                return Self::new(fs);
            }
        };

        match serde_json::from_slice::<TicketsDocument>(&data) {
            Ok(doc) => Self::from_document(fs, doc),
            Err(e) => {
                tracing::warn!(
                    "{} is not valid tickets JSON; starting with an empty store: {e}",
                    path.display()
                );
                Self::new(fs)
            }
        }
    }

    /// Write the whole store to `<home>/.gotickets/tickets.json` as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `HomeDir` if the home directory cannot be resolved, `Io` if
    /// the directory cannot be created or the file written, or `Json` on
    /// serialization failure.
    pub fn save(&self) -> Result<()> {
        let dir = data_dir(self.fs.as_ref())?;
        self.fs.create_dir_all(&dir)?;

        let doc = TicketsDocumentRef {
            tickets: &self.tickets,
            next_id: self.next_id,
        };
        let json = serde_json::to_vec_pretty(&doc)?;

        let path = dir.join(TICKETS_FILE_NAME);
        self.fs.write(&path, &json)?;
        tracing::debug!("Saved {} ticket(s) to {}", self.tickets.len(), path.display());
        Ok(())
    }

    /// The filesystem this store persists through.
    #[must_use]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Back up the primary file; failures are logged and swallowed.
    pub(crate) fn backup_before_mutation(&self) {
        if let Err(e) = backup::create_backup(self.fs.as_ref()) {
            tracing::warn!("Failed to create backup: {e}");
        }
    }

    /// Append a new ticket and return it.
    ///
    /// Does not check for duplicate URLs; use
    /// [`has_ticket_with_url`](Self::has_ticket_with_url) first.
    pub fn add_ticket(&mut self, title: impl Into<String>, url: impl Into<String>) -> &Ticket {
        self.backup_before_mutation();

        let index = self.tickets.len();
        self.tickets.push(Ticket {
            id: self.next_id,
            title: title.into(),
            url: url.into(),
            created_at: Utc::now(),
        });
        self.next_id += 1;
        &self.tickets[index]
    }

    /// Remove the ticket with `id`. Returns whether one was removed.
    pub fn delete_ticket(&mut self, id: u64) -> bool {
        self.backup_before_mutation();

        match self.tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tickets.remove(index);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Tickets whose title or URL contains `query`, case-insensitively, in
    /// store order. An empty query returns every ticket.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Ticket> {
        if query.is_empty() {
            return self.tickets.iter().collect();
        }

        let query = query.to_lowercase();
        self.tickets
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query) || t.url.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Whether some ticket has exactly this URL (case-sensitive).
    #[must_use]
    pub fn has_ticket_with_url(&self, url: &str) -> bool {
        !url.is_empty() && self.tickets.iter().any(|t| t.url == url)
    }

    /// Get a ticket by id.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if no ticket has this id.
    pub fn get(&self, id: u64) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .ok_or(TicketsError::TicketNotFound { id })
    }

    /// All tickets in display order.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// The id the next added ticket will get.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
