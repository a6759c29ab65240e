//! App core for LendHand.
//!
//! Central struct holding the storage handle and all managers and
//! services, managing application lifecycle.

use std::sync::{Arc, Mutex};

use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::session_manager::SessionManager;
use crate::services::api_client::LendingApi;
use crate::services::catalog::ItemCatalog;
use crate::services::image_table::ImageTable;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
use crate::types::errors::StorageError;

/// Central application struct wiring storage, managers, and services.
pub struct App {
    pub kv: Arc<dyn KeyValueStore>,
    pub images: Arc<ImageTable>,
    pub session_manager: Arc<SessionManager>,
    pub bookmark_store: Arc<BookmarkStore>,
    pub catalog: ItemCatalog,
    pub api: LendingApi,
    pub settings_engine: Mutex<SettingsEngine>,
}

impl App {
    /// Opens the app over a SQLite database at `db_path`.
    ///
    /// Settings are loaded from the platform config path (or
    /// `settings_path` when given). Must be called from within a tokio
    /// runtime — the bookmark store spawns its persist writer here.
    pub fn open(db_path: &str, settings_path: Option<String>) -> Result<Self, StorageError> {
        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open(db_path)?);
        Ok(Self::build(kv, settings_path))
    }

    /// Opens the app over a non-durable in-memory store. Used by tests and
    /// the demo binary.
    pub fn open_in_memory() -> Self {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        Self::build(kv, None)
    }

    /// Opens the app over an existing storage handle. Useful for simulating
    /// a relaunch against the same data.
    pub fn with_store(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::build(kv, None)
    }

    fn build(kv: Arc<dyn KeyValueStore>, settings_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path);
        // Missing or unreadable settings fall back to defaults.
        let _ = settings_engine.load();

        let api_settings = settings_engine.get_settings().api.clone();
        let api = LendingApi::new(api_settings.base_url, api_settings.timeout_secs);

        let images = Arc::new(ImageTable::builtin());
        let session_manager = Arc::new(SessionManager::new(kv.clone()));
        let bookmark_store = Arc::new(BookmarkStore::new(kv.clone(), images.clone()));

        Self {
            kv,
            images,
            session_manager,
            bookmark_store,
            catalog: ItemCatalog::seeded(),
            api,
            settings_engine: Mutex::new(settings_engine),
        }
    }

    /// Startup sequence: restore the previous session and hydrate the
    /// bookmark store for the restored identity.
    pub async fn startup(&self) {
        if let Some(account) = self.session_manager.restore().await {
            self.bookmark_store.set_active_user(Some(account.id)).await;
        }
    }

    /// Shutdown sequence: wait for queued bookmark writes to settle.
    pub async fn shutdown(&self) {
        self.bookmark_store.flush().await;
    }
}
