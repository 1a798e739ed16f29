//! `tickets-lib` - Ticket storage engine.
//!
//! Tracks links (issue-tracker URLs, task URLs) with titles. Tickets live
//! in memory and persist as JSON under `~/.gotickets`, with a timestamped
//! backup taken before every mutation.
//!
//! All file access goes through a [`FileSystem`], so the engine runs
//! against the real disk ([`OsFileSystem`]) or entirely in memory
//! ([`MemoryFileSystem`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tickets_lib::{OsFileSystem, TicketStore, backup};
//!
//! let fs = Arc::new(OsFileSystem::new());
//!
//! // Load (never fails; starts empty when there is nothing usable on disk)
//! let mut store = TicketStore::load(fs.clone());
//!
//! // Add, unless already tracked
//! let url = "https://github.com/user/repo/issues/123";
//! if !store.has_ticket_with_url(url) {
//!     store.add_ticket("Fix login", url);
//! }
//!
//! // Bulk import `<url> - <title>` lines
//! let result = store.import_from_file("links.txt").unwrap();
//! println!("added {}, duplicates {}", result.added, result.duplicates);
//!
//! store.save().unwrap();
//!
//! // Roll back to an earlier snapshot
//! if let Some(latest) = backup::sorted_backups(&*fs).unwrap().first() {
//!     backup::restore_from_backup(&*fs, &latest.name).unwrap();
//! }
//! ```

pub mod backup;
pub mod error;
pub mod fs;
pub mod import;
pub mod model;
pub mod paths;
pub mod store;

pub use backup::{BackupName, create_backup, list_backups, restore_from_backup, sorted_backups};
pub use error::{Result, TicketsError, ValidationError};
pub use fs::{DirEntry, FileSystem, FsOp, MemoryFileSystem, Metadata, OsFileSystem};
pub use import::{ImportError, ImportResult};
pub use model::{Ticket, TicketsDocument};
pub use store::TicketStore;
