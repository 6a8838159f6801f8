//! Payment-session collaborator for the Eleora storefront.
//!
//! Checkout with a non-cash method hands the cart's priced lines to a
//! separate payment-session server, which answers with a hosted payment
//! page URL. This crate owns that boundary: the wire types, the 1:1
//! derivation of session line items from the cart (rupees in, integer
//! paise out), and an HTTP client behind a seam trait.

mod client;
mod error;
mod types;

pub use client::{HttpSessionClient, SessionClient};
pub use error::PaymentError;
pub use types::{
    session_line_items, CreateSessionRequest, CreateSessionResponse, SessionLineItem,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        session_line_items, CreateSessionRequest, CreateSessionResponse, HttpSessionClient,
        PaymentError, SessionClient, SessionLineItem,
    };
}
