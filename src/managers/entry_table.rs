//! Entry Table for Passify.
//!
//! View-model state for the vault screen: the loaded entries, per-row
//! visibility under the active filter, and the status line. Passwords are
//! never rendered in cleartext by the table; callers display the fixed
//! mask and copy the real value from the underlying entry.

use std::fs;
use std::path::Path;

use crate::types::entry::{Entry, EntryPayload};
use crate::types::errors::ExportError;

/// Fixed mask shown in place of every password cell.
const PASSWORD_MASK: &str = "********";

/// Trait defining the entry table interface.
pub trait EntryTableTrait {
    fn set_entries(&mut self, entries: Vec<Entry>);
    fn apply_filter(&mut self, query: &str);
    fn visible_rows(&self) -> Vec<&Entry>;
    fn row_count(&self) -> usize;
    fn is_row_hidden(&self, row: usize) -> bool;
    fn entry_at(&self, row: usize) -> Option<&Entry>;
    fn status_line(&self) -> &str;
    fn masked_password(&self) -> &'static str;
    fn export_json(&self, path: &Path) -> Result<(), ExportError>;
}

/// Table state: entries, row visibility, filter text, status line.
pub struct EntryTable {
    entries: Vec<Entry>,
    hidden: Vec<bool>,
    filter: String,
    status_line: String,
}

impl EntryTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            hidden: Vec::new(),
            filter: String::new(),
            status_line: String::new(),
        }
    }

    /// A row matches when any of title, username, url or notes contains
    /// the query, case-insensitively. Passwords are never searched.
    fn matches(entry: &Entry, query: &str) -> bool {
        [
            entry.title.as_str(),
            entry.username.as_str(),
            entry.url.as_str(),
            entry.notes.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
    }

    fn recompute_hidden(&mut self) {
        let query = self.filter.to_lowercase();
        self.hidden = self
            .entries
            .iter()
            .map(|entry| !Self::matches(entry, &query))
            .collect();
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryTableTrait for EntryTable {
    /// Replaces the table contents with a fresh load. The active filter is
    /// cleared so every row starts visible, and the status line reports
    /// the new row count.
    fn set_entries(&mut self, entries: Vec<Entry>) {
        self.status_line = format!("{} entries loaded.", entries.len());
        self.hidden = vec![false; entries.len()];
        self.entries = entries;
        self.filter.clear();
    }

    /// Recomputes row visibility for the given query. An empty query
    /// shows every row.
    fn apply_filter(&mut self, query: &str) {
        self.filter = query.to_string();
        self.recompute_hidden();
    }

    fn visible_rows(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .zip(self.hidden.iter())
            .filter(|(_, hidden)| !**hidden)
            .map(|(entry, _)| entry)
            .collect()
    }

    fn row_count(&self) -> usize {
        self.entries.len()
    }

    fn is_row_hidden(&self, row: usize) -> bool {
        self.hidden.get(row).copied().unwrap_or(true)
    }

    fn entry_at(&self, row: usize) -> Option<&Entry> {
        self.entries.get(row)
    }

    fn status_line(&self) -> &str {
        &self.status_line
    }

    fn masked_password(&self) -> &'static str {
        PASSWORD_MASK
    }

    /// Writes every loaded entry (filtered or not) to `path` as pretty
    /// JSON. Server identifiers are stripped from the export.
    fn export_json(&self, path: &Path) -> Result<(), ExportError> {
        let export: Vec<EntryPayload> = self.entries.iter().map(EntryPayload::from).collect();
        let body = serde_json::to_string_pretty(&export)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
        fs::write(path, body).map_err(|e| ExportError::IoError(e.to_string()))?;
        Ok(())
    }
}
