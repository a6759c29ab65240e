//! Session manager for LendHand.
//!
//! Holds the signed-in account, broadcasts identity changes over a watch
//! channel, and mirrors the account into storage so a restart restores
//! it. This is the current-user signal the bookmark store reacts to;
//! credential handling lives on the server side and is out of scope here.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tracing::warn;

use crate::storage::KeyValueStore;
use crate::types::session::UserAccount;

const SESSION_KEY: &str = "session:current";

/// Signed-in account state plus the identity signal derived from it.
pub struct SessionManager {
    kv: Arc<dyn KeyValueStore>,
    current: RwLock<Option<UserAccount>>,
    identity: watch::Sender<Option<String>>,
}

impl SessionManager {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            kv,
            current: RwLock::new(None),
            identity,
        }
    }

    /// Restores the previously signed-in account from storage, if any.
    ///
    /// Unreadable or missing session data leaves the manager signed out;
    /// failures are logged, never surfaced.
    pub async fn restore(&self) -> Option<UserAccount> {
        let stored = match self.kv.get(SESSION_KEY).await {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "session restore failed");
                None
            }
        };
        let account = stored.and_then(|raw| match serde_json::from_str::<UserAccount>(&raw) {
            Ok(account) => Some(account),
            Err(err) => {
                warn!(error = %err, "discarding unreadable session data");
                None
            }
        });
        if let Some(account) = &account {
            *self.current.write().unwrap() = Some(account.clone());
            self.identity.send_replace(Some(account.id.clone()));
        }
        account
    }

    /// Signs an account in and persists it. The identity signal fires
    /// before the storage write; a failed write only costs the restore on
    /// next launch.
    pub async fn login(&self, account: UserAccount) {
        *self.current.write().unwrap() = Some(account.clone());
        self.identity.send_replace(Some(account.id.clone()));

        match serde_json::to_string(&account) {
            Ok(payload) => {
                if let Err(err) = self.kv.set(SESSION_KEY, &payload).await {
                    warn!(error = %err, "session persist failed");
                }
            }
            Err(err) => warn!(error = %err, "session serialization failed"),
        }
    }

    /// Signs out and clears the stored session.
    pub async fn logout(&self) {
        *self.current.write().unwrap() = None;
        self.identity.send_replace(None);

        if let Err(err) = self.kv.remove(SESSION_KEY).await {
            warn!(error = %err, "session clear failed");
        }
    }

    pub fn current_account(&self) -> Option<UserAccount> {
        self.current.read().unwrap().clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .map(|account| account.id.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// Identity signal: `Some(user_id)` while signed in, `None` otherwise.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.identity.subscribe()
    }
}
