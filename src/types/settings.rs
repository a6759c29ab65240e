use serde::{Deserialize, Serialize};

/// Top-level application settings, persisted as JSON at the platform
/// config path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

/// General client options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub language: String,
    /// Screen the UI opens on: `"feed"` or `"bookmarks"`.
    pub startup_screen: String,
    /// Show a badge on listings the user has already lent out.
    pub show_lent_badge: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            startup_screen: "feed".to_string(),
            show_lent_badge: true,
        }
    }
}

/// Lending service endpoint options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.lendhand.app".to_string(),
            timeout_secs: 10,
        }
    }
}
