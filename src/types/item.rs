use serde::{Deserialize, Serialize};

/// Well-known lending state tags used by the service.
pub mod request_status {
    pub const NONE: &str = "none";
    pub const REQUESTED: &str = "requested";
    pub const LENT: &str = "lent";
}

/// A neighborhood listing as shaped by the lending service.
///
/// Field names follow the wire format (`item_id`, `name`,
/// `request_status`), which is also what the bookmark normalization
/// fallbacks accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub owner: String,
    pub category: String,
    #[serde(default = "default_request_status")]
    pub request_status: String,
    /// How many times the item has been lent out.
    #[serde(default)]
    pub count: i64,
    /// Asset key or absolute URL for the listing photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

fn default_request_status() -> String {
    request_status::NONE.to_string()
}

/// A borrow request recorded against a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub id: String,
    pub item_id: i64,
    pub borrower: String,
    pub status: String,
}
