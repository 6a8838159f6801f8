//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A line item reached the checkout boundary without a usable price.
    #[error("Item has no valid price: {name} ({size})")]
    ZeroPricedItem { name: String, size: String },

    /// Unknown size variant label.
    #[error("Unknown size variant: {0}")]
    UnknownSize(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
