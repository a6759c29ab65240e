// LendHand platform paths for macOS
// Config and data both live under ~/Library/Application Support/LendHand

use std::env;
use std::path::PathBuf;

fn app_support_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("LendHand")
}

/// Returns the configuration directory for LendHand on macOS.
pub fn get_config_dir() -> PathBuf {
    app_support_dir()
}

/// Returns the data directory for LendHand on macOS.
pub fn get_data_dir() -> PathBuf {
    app_support_dir()
}
