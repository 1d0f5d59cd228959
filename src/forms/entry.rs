//! Entry add/edit form.
//!
//! The same form backs both screens; the edit screen prefills it from the
//! entry fetched off the backend.

use crate::types::entry::{Entry, EntryPayload};
use crate::types::errors::ValidationError;

/// Entry screen: title, username, password, url, notes.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl EntryForm {
    /// Title, username, and password are required; url and notes may stay
    /// empty.
    pub fn validate(&self) -> Result<EntryPayload, ValidationError> {
        if self.title.is_empty() || self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(EntryPayload {
            title: self.title.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
        })
    }
}

impl From<&Entry> for EntryForm {
    /// Prefills the form for editing. The entry's `id` stays with the
    /// caller; the form only carries editable fields.
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            username: entry.username.clone(),
            password: entry.password.clone(),
            url: entry.url.clone(),
            notes: entry.notes.clone(),
        }
    }
}
