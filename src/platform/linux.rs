// LendHand platform paths for Linux
// Config: ~/.config/lendhand
// Data:   ~/.local/share/lendhand

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LendHand on Linux.
/// Uses `$XDG_CONFIG_HOME/lendhand` if set, otherwise `~/.config/lendhand`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("lendhand")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("lendhand")
    }
}

/// Returns the data directory for LendHand on Linux.
/// Uses `$XDG_DATA_HOME/lendhand` if set, otherwise `~/.local/share/lendhand`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("lendhand")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("lendhand")
    }
}
