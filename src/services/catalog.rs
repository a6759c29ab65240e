//! In-memory item catalog.
//!
//! Stand-in for the lending service's listing database, seeded with sample
//! neighborhood items. The demo binary and tests use it as the source of
//! server-shaped records; a deployed client talks to the real service via
//! [`crate::services::api_client::LendingApi`] instead.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::types::errors::CatalogError;
use crate::types::item::{request_status, BorrowRequest, Item};

/// Mutable catalog of listings plus the borrow requests made against them.
pub struct ItemCatalog {
    items: RwLock<HashMap<i64, Item>>,
    requests: RwLock<Vec<BorrowRequest>>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Creates a catalog pre-loaded with the sample neighborhood listings.
    pub fn seeded() -> Self {
        let catalog = Self::new();
        {
            let mut items = catalog.items.write().unwrap();
            for item in sample_items() {
                items.insert(item.item_id, item);
            }
        }
        catalog
    }

    /// All listings, ordered by item id.
    pub fn list(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.read().unwrap().values().cloned().collect();
        items.sort_by_key(|item| item.item_id);
        items
    }

    pub fn get(&self, id: i64) -> Option<Item> {
        self.items.read().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// Records a borrow request and marks the listing as requested.
    ///
    /// Fails if the item does not exist or is already requested/lent.
    pub fn request_item(&self, id: i64, borrower: &str) -> Result<BorrowRequest, CatalogError> {
        let mut items = self.items.write().unwrap();
        let item = items.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        if item.request_status != request_status::NONE {
            return Err(CatalogError::Unavailable(id));
        }
        item.request_status = request_status::REQUESTED.to_string();

        let request = BorrowRequest {
            id: Uuid::new_v4().to_string(),
            item_id: id,
            borrower: borrower.to_string(),
            status: request_status::REQUESTED.to_string(),
        };
        self.requests.write().unwrap().push(request.clone());
        Ok(request)
    }

    /// Marks a lent or requested listing as available again and bumps its
    /// lend counter.
    pub fn return_item(&self, id: i64) -> Result<(), CatalogError> {
        let mut items = self.items.write().unwrap();
        let item = items.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        if item.request_status != request_status::NONE {
            item.request_status = request_status::NONE.to_string();
            item.count += 1;
        }
        Ok(())
    }

    /// Borrow requests recorded so far, oldest first.
    pub fn requests(&self) -> Vec<BorrowRequest> {
        self.requests.read().unwrap().clone()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_items() -> Vec<Item> {
    fn item(
        item_id: i64,
        name: &str,
        owner: &str,
        category: &str,
        status: &str,
        count: i64,
        image: Option<&str>,
        description: &str,
    ) -> Item {
        Item {
            item_id,
            name: name.to_string(),
            owner: owner.to_string(),
            category: category.to_string(),
            request_status: status.to_string(),
            count,
            image: image.map(str::to_string),
            description: description.to_string(),
        }
    }

    vec![
        item(
            1,
            "Cordless drill",
            "Sam P.",
            "tools",
            request_status::NONE,
            4,
            Some("drill"),
            "18V drill with two batteries and a bit set.",
        ),
        item(
            2,
            "Extension ladder",
            "Ruth K.",
            "tools",
            request_status::LENT,
            7,
            Some("ladder"),
            "20ft aluminium ladder. Heavy — bring a friend.",
        ),
        item(
            3,
            "Pressure washer",
            "Dev A.",
            "tools",
            request_status::NONE,
            2,
            Some("https://images.lendhand.app/listings/washer.jpg"),
            "Electric pressure washer, good for decks and fences.",
        ),
        item(
            4,
            "The Left Hand of Darkness",
            "Maya L.",
            "books",
            request_status::NONE,
            1,
            Some("book"),
            "Paperback, lightly annotated.",
        ),
        item(
            5,
            "Stand mixer",
            "Priya N.",
            "kitchen",
            request_status::NONE,
            3,
            Some("mixer"),
            "Comes with dough hook and whisk attachments.",
        ),
        item(
            6,
            "4-person tent",
            "Jonas F.",
            "outdoors",
            request_status::REQUESTED,
            5,
            Some("tent"),
            "Waterproof, packs small. Poles included.",
        ),
        item(
            7,
            "Sewing machine",
            "Ruth K.",
            "craft",
            request_status::NONE,
            2,
            Some("sewing"),
            "Mechanical machine, threads like a dream.",
        ),
        item(
            8,
            "Giant Jenga set",
            "Sam P.",
            "games",
            request_status::NONE,
            9,
            None,
            "Backyard-sized blocks. Loud when it falls.",
        ),
    ]
}
