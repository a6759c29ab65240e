use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque reference to a loadable display image.
///
/// `Asset` carries a pre-resolved local asset id bundled with the UI;
/// `Remote` wraps an absolute URL. Handles are derived state — they are
/// recomputed on load and never persisted themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageHandle {
    Asset(i64),
    Remote(String),
}

/// One saved item from the active user's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub id: i64,
    pub title: String,
    /// Lending state tag, `"none"` when the source carried nothing.
    pub status: String,
    pub count: i64,
    pub category: Option<String>,
    /// Resolved display handle, if the image reference resolved to one.
    pub image: Option<ImageHandle>,
    /// The string reference the handle was derived from; this is what
    /// survives a persist/reload cycle.
    pub image_ref: Option<String>,
}

/// Mapping owned by one user: item id to bookmark record.
///
/// Invariant: every key equals the `id` of its value. Insertion order is
/// not significant; the UI re-sorts for display.
pub type BookmarkSet = HashMap<i64, BookmarkRecord>;

/// Durable form of a bookmark.
///
/// Identical to [`BookmarkRecord`] minus the resolved image handle, which
/// can be a non-serializable UI resource. Serialized with the wire field
/// names the stored blobs use (`imageReference`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBookmark {
    pub id: i64,
    pub title: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub image_reference: Option<String>,
}

fn default_status() -> String {
    "none".to_string()
}

impl From<&BookmarkRecord> for PersistedBookmark {
    fn from(record: &BookmarkRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            status: record.status.clone(),
            count: record.count,
            category: record.category.clone(),
            image_reference: record.image_ref.clone(),
        }
    }
}
