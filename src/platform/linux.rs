// Passify platform paths for Linux
// Config: ~/.config/passify

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Passify on Linux.
/// Uses `$XDG_CONFIG_HOME/passify` if set, otherwise `~/.config/passify`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("passify")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("passify")
    }
}
