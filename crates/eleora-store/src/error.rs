//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to access the backing storage.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Key not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}
