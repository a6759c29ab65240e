use std::fmt;

// === StorageError ===

/// Errors produced by the persistent key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying database operation failed.
    Database(String),
    /// Stored data could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ApiError ===

/// Errors related to the lending service REST client.
#[derive(Debug)]
pub enum ApiError {
    /// A transport-level error occurred while talking to the service.
    Network(String),
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Lending API network error: {}", msg),
            ApiError::Status(code) => write!(f, "Lending API returned status {}", code),
            ApiError::Decode(msg) => write!(f, "Lending API decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// === CatalogError ===

/// Errors related to the item catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// No item with the given id exists.
    NotFound(i64),
    /// The item exists but cannot be borrowed right now.
    Unavailable(i64),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(id) => write!(f, "Item not found: {}", id),
            CatalogError::Unavailable(id) => write!(f, "Item not available: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}
