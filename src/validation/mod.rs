//! Validation helpers for `tickets_rust`.
//!
//! These routines check user input for new tickets and return
//! structured validation errors without touching storage.

use tickets_lib::{TicketStore, TicketsError, ValidationError};

/// Validates fields of a ticket about to be added.
pub struct TicketValidator;

impl TicketValidator {
    /// Validate a title/URL pair and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any field is blank.
    pub fn validate(title: &str, url: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if url.trim().is_empty() {
            errors.push(ValidationError::new("url", "cannot be empty"));
        }
        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a new ticket against the store: fields first, then
    /// uniqueness of the URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, or `DuplicateUrl` if
    /// the URL is already tracked.
    pub fn validate_new(store: &TicketStore, title: &str, url: &str) -> Result<(), TicketsError> {
        Self::validate(title, url).map_err(TicketsError::from_validation_errors)?;
        if store.has_ticket_with_url(url.trim()) {
            return Err(TicketsError::DuplicateUrl {
                url: url.trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tickets_lib::MemoryFileSystem;

    #[test]
    fn test_validate_reports_every_blank_field() {
        assert!(TicketValidator::validate("Title", "https://example.com/1").is_ok());

        let errors = TicketValidator::validate("  ", "").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["url", "title"]);
    }

    #[test]
    fn test_validate_new_rejects_duplicate_url() {
        crate::logging::init_test_logging();
        let mut store = TicketStore::new(Arc::new(MemoryFileSystem::new("/home/tester")));
        store.add_ticket("First", "https://example.com/1");

        let err = TicketValidator::validate_new(&store, "Again", " https://example.com/1 ")
            .unwrap_err();
        assert!(matches!(err, TicketsError::DuplicateUrl { ref url } if url == "https://example.com/1"));

        let err = TicketValidator::validate_new(&store, "", "https://example.com/2").unwrap_err();
        assert!(matches!(err, TicketsError::Validation { ref field, .. } if field == "title"));

        assert!(TicketValidator::validate_new(&store, "New", "https://example.com/2").is_ok());
    }
}
