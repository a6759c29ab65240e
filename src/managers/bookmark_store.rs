//! Bookmark store for LendHand.
//!
//! Owns the active user's saved-item mapping and keeps it synchronized
//! with durable per-user storage. UI callers feed it loosely-shaped
//! records (their own candidates or server-shaped listings); the store
//! normalizes them, mutates the in-memory set synchronously, and persists
//! asynchronously through a single writer task so the last mutation always
//! wins on disk.
//!
//! Failures never surface to callers: unreadable stored data degrades to
//! an empty set, failed writes are logged and dropped. The next mutation
//! re-serializes the full set, so storage converges as soon as any later
//! write succeeds.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::warn;

use crate::services::image_table::ImageTable;
use crate::storage::KeyValueStore;
use crate::types::bookmark::{BookmarkRecord, BookmarkSet, ImageHandle, PersistedBookmark};

const KEY_PREFIX: &str = "bookmarks";
const ANONYMOUS_BUCKET: &str = "anonymous";

/// Storage key for a user's bookmark blob.
///
/// Keys are namespaced per identity so switching accounts never leaks
/// bookmarks across users. The anonymous bucket exists in the key scheme
/// but is never written: with no signed-in user the store keeps bookmarks
/// in memory only.
pub fn storage_key(user: Option<&str>) -> String {
    format!("{}:{}", KEY_PREFIX, user.unwrap_or(ANONYMOUS_BUCKET))
}

/// Outcome of resolving a raw image value: a display handle for the UI and
/// the string key that goes into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub handle: Option<ImageHandle>,
    pub key: Option<String>,
}

impl ResolvedImage {
    fn none() -> Self {
        Self {
            handle: None,
            key: None,
        }
    }
}

/// Derives a display handle and persistable key from a raw image value.
///
/// - numbers pass through as pre-resolved local asset ids (nothing to
///   persist beyond the handle itself, so the key is `None`);
/// - strings are trimmed, then either wrapped as a remote URL (persisting
///   the URL) or lower-cased and looked up in the image table (persisting
///   the lower-cased key whether or not the lookup succeeded);
/// - objects carrying a `uri` field wrap that URI;
/// - anything else yields no image.
pub fn resolve_image(raw: Option<&Value>, images: &ImageTable) -> ResolvedImage {
    let Some(raw) = raw else {
        return ResolvedImage::none();
    };
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(asset) => ResolvedImage {
                handle: Some(ImageHandle::Asset(asset)),
                key: None,
            },
            None => ResolvedImage::none(),
        },
        Value::String(s) => resolve_image_str(s, images),
        Value::Object(map) => match map.get("uri").and_then(Value::as_str) {
            Some(uri) => {
                let uri = uri.trim();
                if uri.is_empty() {
                    ResolvedImage::none()
                } else {
                    ResolvedImage {
                        handle: Some(ImageHandle::Remote(uri.to_string())),
                        key: Some(uri.to_string()),
                    }
                }
            }
            None => ResolvedImage::none(),
        },
        _ => ResolvedImage::none(),
    }
}

/// String form of image resolution; also used to rehydrate handles from
/// persisted references, which keeps reloads deterministic.
fn resolve_image_str(s: &str, images: &ImageTable) -> ResolvedImage {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return ResolvedImage::none();
    }
    if is_absolute_url(trimmed) {
        return ResolvedImage {
            handle: Some(ImageHandle::Remote(trimmed.to_string())),
            key: Some(trimmed.to_string()),
        };
    }
    let key = trimmed.to_lowercase();
    ResolvedImage {
        handle: images.resolve(&key),
        key: Some(key),
    }
}

fn is_absolute_url(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reads a field, falling back to `fallback` when the first is absent or
/// null (mirrors how the UI layer merges its own candidates with
/// server-shaped records).
fn field<'a>(raw: &'a Value, name: &str, fallback: &str) -> Option<&'a Value> {
    match raw.get(name) {
        Some(v) if !v.is_null() => Some(v),
        _ => match raw.get(fallback) {
            Some(v) if !v.is_null() => Some(v),
            _ => None,
        },
    }
}

/// Coerces an id value to an integer: JSON integers directly, finite
/// floats and numeric strings by truncation. Anything else fails.
fn coerce_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f as i64)
        }
        _ => None,
    }
}

/// Parses a loosely-shaped bookmark candidate into a record.
///
/// Accepts both UI-local candidates (`id`/`title`/`status`) and
/// server-shaped listings (`item_id`/`name`/`request_status`). Returns
/// `None` when the id does not coerce to a finite number or the title is
/// empty after trimming — callers treat that as a silent no-op.
pub fn normalize(raw: &Value, images: &ImageTable) -> Option<BookmarkRecord> {
    let id = coerce_id(field(raw, "id", "item_id"))?;
    let title = field(raw, "title", "name")?
        .as_str()
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();
    let status = field(raw, "status", "request_status")
        .and_then(Value::as_str)
        .unwrap_or("none")
        .to_string();
    let count = raw.get("count").and_then(Value::as_i64).unwrap_or(0);
    let category = match raw.get("category") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };
    let image = resolve_image(raw.get("image"), images);

    Some(BookmarkRecord {
        id,
        title,
        status,
        count,
        category,
        image: image.handle,
        image_ref: image.key,
    })
}

fn rehydrate(persisted: PersistedBookmark, images: &ImageTable) -> BookmarkRecord {
    let handle = persisted
        .image_reference
        .as_deref()
        .and_then(|reference| resolve_image_str(reference, images).handle);
    BookmarkRecord {
        id: persisted.id,
        title: persisted.title,
        status: persisted.status,
        count: persisted.count,
        category: persisted.category,
        image: handle,
        image_ref: persisted.image_reference,
    }
}

struct StoreState {
    user: Option<String>,
    /// Bumped on every identity change; in-flight loads compare against it
    /// and discard their result when it moved on.
    epoch: u64,
    bookmarks: BookmarkSet,
}

enum PersistJob {
    Write { key: String, payload: String },
    Flush(oneshot::Sender<()>),
}

/// Per-user bookmark state, synchronized with durable storage.
pub struct BookmarkStore {
    kv: Arc<dyn KeyValueStore>,
    images: Arc<ImageTable>,
    state: Mutex<StoreState>,
    revision: watch::Sender<u64>,
    persist_tx: mpsc::UnboundedSender<PersistJob>,
}

impl BookmarkStore {
    /// Creates a store over the given storage backend and image table.
    ///
    /// Spawns the persist writer task, so this must be called from within
    /// a tokio runtime.
    pub fn new(kv: Arc<dyn KeyValueStore>, images: Arc<ImageTable>) -> Self {
        let (persist_tx, persist_rx) = mpsc::unbounded_channel();
        spawn_writer(kv.clone(), persist_rx);
        let (revision, _) = watch::channel(0);
        Self {
            kv,
            images,
            state: Mutex::new(StoreState {
                user: None,
                epoch: 0,
                bookmarks: HashMap::new(),
            }),
            revision,
            persist_tx,
        }
    }

    /// Reacts to an identity change: resets the set, then loads the new
    /// user's bookmarks from storage.
    ///
    /// The in-memory set is cleared synchronously before the read starts.
    /// Each load is tagged with the epoch of the identity change that
    /// issued it; if the identity changes again while the read is in
    /// flight, the stale result is discarded on arrival.
    pub async fn set_active_user(&self, user: Option<String>) {
        let (epoch, key) = {
            let mut state = self.state.lock().unwrap();
            state.epoch += 1;
            state.bookmarks.clear();
            state.user = user;
            (
                state.epoch,
                state.user.as_deref().map(|u| storage_key(Some(u))),
            )
        };
        self.bump();

        // Logged out: empty set, no storage read.
        let Some(key) = key else {
            return;
        };

        let loaded = match self.kv.get(&key).await {
            Ok(Some(payload)) => {
                match serde_json::from_str::<HashMap<String, PersistedBookmark>>(&payload) {
                    Ok(map) => map
                        .into_values()
                        .map(|p| {
                            let record = rehydrate(p, &self.images);
                            (record.id, record)
                        })
                        .collect(),
                    Err(err) => {
                        warn!(%key, error = %err, "discarding unreadable bookmark data");
                        HashMap::new()
                    }
                }
            }
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!(%key, error = %err, "bookmark load failed");
                HashMap::new()
            }
        };

        {
            let mut state = self.state.lock().unwrap();
            if state.epoch != epoch {
                // Identity changed while the read was in flight.
                return;
            }
            state.bookmarks = loaded;
        }
        self.bump();
    }

    /// Follows a session identity signal, reloading on every change.
    pub fn bind_session(
        store: Arc<Self>,
        mut identity: watch::Receiver<Option<String>>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let user = identity.borrow_and_update().clone();
                store.set_active_user(user).await;
                if identity.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    /// Whether `id` is currently saved. No side effects.
    pub fn is_saved(&self, id: i64) -> bool {
        self.state.lock().unwrap().bookmarks.contains_key(&id)
    }

    /// A saved record by id, if present.
    pub fn get(&self, id: i64) -> Option<BookmarkRecord> {
        self.state.lock().unwrap().bookmarks.get(&id).cloned()
    }

    /// Read-only copy of the current set, safe for the UI to enumerate.
    pub fn snapshot(&self) -> BookmarkSet {
        self.state.lock().unwrap().bookmarks.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The identity the store currently holds bookmarks for.
    pub fn active_user(&self) -> Option<String> {
        self.state.lock().unwrap().user.clone()
    }

    /// Change notifications: the value is a revision counter, subscribers
    /// re-query [`BookmarkStore::snapshot`] when it moves.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Saves or unsaves an item from a loosely-shaped record.
    ///
    /// Returns `Some(saved_now)` after a mutation, `None` when the input
    /// failed normalization and nothing happened. Exactly one of
    /// insert/remove happens per successful call.
    pub fn toggle(&self, raw: &Value) -> Option<bool> {
        let record = normalize(raw, &self.images)?;
        let saved = {
            let mut state = self.state.lock().unwrap();
            let saved = if state.bookmarks.remove(&record.id).is_some() {
                false
            } else {
                state.bookmarks.insert(record.id, record);
                true
            };
            self.queue_persist(&state);
            saved
        };
        self.bump();
        Some(saved)
    }

    /// Deletes a bookmark by id. Removing an absent id is a no-op and
    /// issues no storage write.
    pub fn remove(&self, id: i64) {
        let removed = {
            let mut state = self.state.lock().unwrap();
            let removed = state.bookmarks.remove(&id).is_some();
            if removed {
                self.queue_persist(&state);
            }
            removed
        };
        if removed {
            self.bump();
        }
    }

    /// Empties the set unconditionally.
    pub fn clear(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.bookmarks.clear();
            self.queue_persist(&state);
        }
        self.bump();
    }

    /// Waits until every persist queued so far has been attempted.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.persist_tx.send(PersistJob::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }

    /// Queues a write of the current set under the key of the identity
    /// active right now. The key travels with the job, so a user switch
    /// mid-write can never land data under the wrong identity. Skipped
    /// entirely when no user is signed in.
    fn queue_persist(&self, state: &StoreState) {
        let Some(user) = state.user.as_deref() else {
            return;
        };
        let key = storage_key(Some(user));
        let persisted: HashMap<String, PersistedBookmark> = state
            .bookmarks
            .values()
            .map(|record| (record.id.to_string(), PersistedBookmark::from(record)))
            .collect();
        match serde_json::to_string(&persisted) {
            Ok(payload) => {
                let _ = self.persist_tx.send(PersistJob::Write { key, payload });
            }
            Err(err) => warn!(%key, error = %err, "bookmark serialization failed"),
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Single writer applying persist jobs in mutation order. Sequencing the
/// writes here is what makes the last mutation win on disk even when the
/// backend reorders concurrent calls internally.
fn spawn_writer(kv: Arc<dyn KeyValueStore>, mut rx: mpsc::UnboundedReceiver<PersistJob>) {
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            match job {
                PersistJob::Write { key, payload } => {
                    if let Err(err) = kv.set(&key, &payload).await {
                        warn!(%key, error = %err, "bookmark persist failed");
                    }
                }
                PersistJob::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
    });
}
