use serde::{Deserialize, Serialize};

/// Theme selection persisted in the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Application settings persisted as JSON at the platform config path.
///
/// Session tokens are deliberately absent: they are held in memory only
/// and never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    pub theme: ThemeMode,
    /// Base URL of the backend API. Endpoint paths are joined onto it.
    pub domain: String,
    /// Product name reported in the User-Agent of unauthenticated requests.
    pub project_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            domain: "http://127.0.0.1:8000".to_string(),
            project_name: "Passify".to_string(),
        }
    }
}
