//! LendHand storage layer.
//!
//! Durable state goes through the [`KeyValueStore`] trait: string keys,
//! string values, async access. [`SqliteKeyValueStore`] is the production
//! backend; [`MemoryKeyValueStore`] backs tests and the demo binary.

pub mod kv;
pub mod sqlite;

pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use sqlite::SqliteKeyValueStore;
