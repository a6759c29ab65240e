//! Image resolution table.
//!
//! Read-only mapping from lower-cased string key to an opaque
//! [`ImageHandle`]. The UI bundles a small set of listing photos as local
//! assets; everything else arrives as an absolute URL and never touches
//! this table.

use std::collections::HashMap;

use crate::types::bookmark::ImageHandle;

/// Lookup table for bundled listing images.
///
/// Keys are stored lower-cased; callers are expected to lower-case before
/// lookup. Unknown keys resolve to `None`, which the UI renders as a
/// placeholder.
pub struct ImageTable {
    entries: HashMap<String, ImageHandle>,
}

impl ImageTable {
    /// The asset set bundled with the client.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("placeholder", 0),
            ("drill", 1),
            ("ladder", 2),
            ("toolbox", 3),
            ("book", 4),
            ("tent", 5),
            ("mixer", 6),
            ("sewing", 7),
        ]
        .into_iter()
        .map(|(key, asset)| (key.to_string(), ImageHandle::Asset(asset))))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, ImageHandle)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Looks up a handle by exact key. Unknown keys return `None`.
    pub fn resolve(&self, key: &str) -> Option<ImageHandle> {
        self.entries.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageTable {
    fn default() -> Self {
        Self::builtin()
    }
}
