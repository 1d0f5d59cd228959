use serde::{Deserialize, Serialize};

/// A stored credential entry as returned by the backend.
///
/// The backend is hyperlinked: `id` is the entry's own detail URL, and
/// item-level GET/PATCH/DELETE requests are issued against it directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

/// Entry fields sent on create and update. Never carries `id`; the same
/// shape is used when exporting entries to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPayload {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl From<&Entry> for EntryPayload {
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
