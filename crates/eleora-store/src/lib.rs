//! Durable key-value persistence for the Eleora storefront.
//!
//! Provides a simple typed store over pluggable byte backends (in-memory
//! for tests, one-file-per-key on disk for real sessions), plus the
//! storefront's four persistence surfaces:
//!
//! - [`CartSlot`]: the session cart, saved after every mutation and
//!   rehydrated fail-soft at startup
//! - [`ProductCatalog`]: product rows, normalized once at load
//! - [`OrderStore`]: placed orders and their status updates
//! - [`ContactStore`]: contact-page messages for the admin inbox
//!
//! # Example
//!
//! ```rust,ignore
//! use eleora_store::{CartSlot, Store};
//!
//! let store = Arc::new(Store::file(data_dir)?);
//! let slot = CartSlot::new(store.clone());
//!
//! let mut cart = slot.load();
//! cart.add(item);
//! slot.save(&cart)?;
//! ```

mod cart_slot;
mod catalog;
mod contacts;
mod error;
mod kv;
mod orders;

pub use cart_slot::{CartSlot, CART_KEY};
pub use catalog::{JsonCatalog, ProductCatalog, PRODUCTS_KEY};
pub use contacts::{ContactMessage, ContactStore, JsonContactStore};
pub use error::StoreError;
pub use kv::{FileStore, KeyValue, MemoryStore, Store};
pub use orders::{JsonOrderStore, OrderStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartSlot, ContactMessage, ContactStore, JsonCatalog, JsonContactStore, JsonOrderStore,
        KeyValue, OrderStore, ProductCatalog, Store, StoreError,
    };
}
