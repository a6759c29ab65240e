//! Unit tests for the key-value storage backends.
//!
//! Exercises both implementations through the `KeyValueStore` trait: the
//! in-memory store and the SQLite store over a real database file.

use lendhand::storage::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};

#[tokio::test]
async fn test_memory_store_roundtrip() {
    let store = MemoryKeyValueStore::new();

    store.set("bookmarks:u1", "{}").await.unwrap();
    assert_eq!(
        store.get("bookmarks:u1").await.unwrap(),
        Some("{}".to_string())
    );

    store.remove("bookmarks:u1").await.unwrap();
    assert_eq!(store.get("bookmarks:u1").await.unwrap(), None);
}

#[tokio::test]
async fn test_sqlite_set_get_overwrite_remove() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lendhand.db");
    let store = SqliteKeyValueStore::open(&db_path).unwrap();

    assert_eq!(store.get("a").await.unwrap(), None);

    store.set("a", "one").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), Some("one".to_string()));

    // Overwrite replaces the previous value
    store.set("a", "two").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), Some("two".to_string()));

    store.remove("a").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), None);

    // Removing an absent key is fine
    store.remove("a").await.unwrap();
}

#[tokio::test]
async fn test_sqlite_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lendhand.db");

    {
        let store = SqliteKeyValueStore::open(&db_path).unwrap();
        store.set("session:current", "{\"id\":\"u1\"}").await.unwrap();
    }

    let store = SqliteKeyValueStore::open(&db_path).unwrap();
    assert_eq!(
        store.get("session:current").await.unwrap(),
        Some("{\"id\":\"u1\"}".to_string())
    );
}

#[tokio::test]
async fn test_sqlite_in_memory_starts_empty() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();
    assert_eq!(store.get("anything").await.unwrap(), None);

    store.set("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
}
