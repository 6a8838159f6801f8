//! Payment error types.

use thiserror::Error;

/// Errors from the payment-session collaborator.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The session server could not be reached.
    #[error("Payment session request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The session server answered with a non-success status.
    #[error("Payment session rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The session server answered with an unusable body.
    #[error("Invalid payment session response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
