//! Thin REST client for the lending service.
//!
//! Typed wrappers over the handful of endpoints the screens call. No retry
//! or caching policy lives here; callers decide what a failed fetch means
//! for them.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::types::errors::ApiError;
use crate::types::item::{BorrowRequest, Item};

/// HTTP client for the lending service API.
pub struct LendingApi {
    client: reqwest::Client,
    base_url: String,
}

impl LendingApi {
    /// Creates a client against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the listing feed.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        let response = self
            .client
            .get(self.url("/items"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// Fetches a single listing by id.
    pub async fn fetch_item(&self, id: i64) -> Result<Item, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/items/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// Submits a borrow request for a listing.
    pub async fn submit_request(
        &self,
        item_id: i64,
        borrower: &str,
    ) -> Result<BorrowRequest, ApiError> {
        let response = self
            .client
            .post(self.url("/requests"))
            .json(&json!({ "item_id": item_id, "borrower": borrower }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

/// Checks the HTTP status and decodes the JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
