use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by the backend.
///
/// Timestamps arrive as ISO-8601 UTC (`Z`-suffixed) and are reformatted
/// for display as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

impl Profile {
    /// Formats a profile timestamp for display.
    pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// `date_joined` formatted for display.
    pub fn date_joined_display(&self) -> String {
        Self::format_timestamp(&self.date_joined)
    }

    /// `last_login` formatted for display. Empty when the user has never
    /// signed in.
    pub fn last_login_display(&self) -> String {
        self.last_login
            .as_ref()
            .map(Self::format_timestamp)
            .unwrap_or_default()
    }
}

/// Name fields sent when updating the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamePayload {
    pub first_name: String,
    pub last_name: String,
}

/// Body of a change-email request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEmailPayload {
    pub current_password: String,
    pub new_email: String,
    pub re_new_email: String,
}

/// Body of a change-password request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordPayload {
    pub current_password: String,
    pub new_password: String,
    pub re_new_password: String,
}

/// Body of an account-deletion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountPayload {
    pub current_password: String,
}
