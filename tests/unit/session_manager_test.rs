//! Unit tests for the session manager: identity signal, persistence, and
//! restore-on-launch behavior.

use std::sync::Arc;

use lendhand::managers::session_manager::SessionManager;
use lendhand::storage::{KeyValueStore, MemoryKeyValueStore};
use lendhand::types::session::UserAccount;

fn setup() -> (Arc<MemoryKeyValueStore>, SessionManager) {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let manager = SessionManager::new(kv.clone());
    (kv, manager)
}

#[tokio::test]
async fn test_login_updates_state_and_signal() {
    let (_kv, manager) = setup();
    let mut identity = manager.subscribe();
    assert_eq!(*identity.borrow_and_update(), None);

    manager.login(UserAccount::new("u42", "Maya")).await;

    assert!(manager.is_logged_in());
    assert_eq!(manager.user_id().as_deref(), Some("u42"));
    assert_eq!(
        manager.current_account().map(|a| a.display_name),
        Some("Maya".to_string())
    );
    identity.changed().await.unwrap();
    assert_eq!(identity.borrow_and_update().as_deref(), Some("u42"));
}

#[tokio::test]
async fn test_logout_clears_state_and_storage() {
    let (kv, manager) = setup();
    manager.login(UserAccount::new("u42", "Maya")).await;
    assert!(kv.get("session:current").await.unwrap().is_some());

    manager.logout().await;

    assert!(!manager.is_logged_in());
    assert_eq!(manager.user_id(), None);
    assert_eq!(kv.get("session:current").await.unwrap(), None);
}

#[tokio::test]
async fn test_restore_brings_back_the_signed_in_account() {
    let (kv, manager) = setup();
    let mut account = UserAccount::new("u42", "Maya");
    account.neighborhood = Some("Elm Street".to_string());
    manager.login(account.clone()).await;

    // Simulated restart: fresh manager over the same storage
    let restored_manager = SessionManager::new(kv);
    assert!(!restored_manager.is_logged_in());

    let restored = restored_manager.restore().await;
    assert_eq!(restored, Some(account));
    assert!(restored_manager.is_logged_in());
    assert_eq!(
        restored_manager
            .subscribe()
            .borrow_and_update()
            .as_deref(),
        Some("u42")
    );
}

#[tokio::test]
async fn test_restore_with_nothing_stored_stays_signed_out() {
    let (_kv, manager) = setup();
    assert_eq!(manager.restore().await, None);
    assert!(!manager.is_logged_in());
}

#[tokio::test]
async fn test_restore_absorbs_unreadable_session_data() {
    let (kv, manager) = setup();
    kv.set("session:current", "not json at all").await.unwrap();

    assert_eq!(manager.restore().await, None);
    assert!(!manager.is_logged_in());
}
