//! The durable cart slot.
//!
//! One slot per browsing session, holding the serialized line-item list.
//! Callers save after every cart mutation; loading is fail-soft: a
//! missing or unparseable slot becomes an empty cart, never an error.

use crate::kv::Store;
use crate::StoreError;
use eleora_commerce::cart::{Cart, LineItem};
use std::sync::Arc;
use tracing::warn;

/// Key of the session cart in the store.
pub const CART_KEY: &str = "eleora_cart";

/// Durable slot for the session cart.
pub struct CartSlot {
    store: Arc<Store>,
}

impl CartSlot {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Load the persisted cart.
    ///
    /// Absent or corrupt state recovers to an empty cart: a shopper with a
    /// damaged slot should see an empty cart, not an error page.
    pub fn load(&self) -> Cart {
        match self.store.get::<Vec<LineItem>>(CART_KEY) {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("discarding unreadable cart state: {e}");
                Cart::new()
            }
        }
    }

    /// Persist the full line-item list.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        self.store.set(CART_KEY, &cart.items())
    }

    /// Delete the slot.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(CART_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eleora_commerce::catalog::{Product, SizePrices, SizeVariant};
    use eleora_commerce::ids::ProductId;

    fn slot() -> CartSlot {
        CartSlot::new(Arc::new(Store::memory()))
    }

    fn item(id: &str, size: SizeVariant, quantity: u32, unit_price: f64) -> LineItem {
        let product = Product::new(
            ProductId::new(id),
            "Wild Forest Honey",
            "Honey",
            SizePrices {
                g50: 80.0,
                g100: 150.0,
                g200: 280.0,
                g500: 650.0,
            },
        );
        LineItem::new(product, size, quantity, unit_price)
    }

    #[test]
    fn test_load_empty_slot() {
        let cart = slot().load();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let slot = slot();
        let mut cart = Cart::new();
        cart.add(item("7", SizeVariant::G100, 2, 150.0));
        cart.add(item("8", SizeVariant::G500, 1, 650.0));
        slot.save(&cart).unwrap();

        let restored = slot.load();
        assert_eq!(restored, cart);
        assert_eq!(restored.total(), 950.0);
        assert_eq!(restored.count(), 3);
    }

    #[test]
    fn test_corrupt_slot_recovers_to_empty() {
        let store = Arc::new(Store::memory());
        store.set(CART_KEY, &"definitely not a cart").unwrap();

        let cart = CartSlot::new(store).load();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_after_each_mutation() {
        let slot = slot();
        let mut cart = slot.load();

        cart.add(item("7", SizeVariant::G100, 2, 150.0));
        slot.save(&cart).unwrap();
        assert_eq!(slot.load().count(), 2);

        cart.update_quantity(&ProductId::new("7"), SizeVariant::G100, 5);
        slot.save(&cart).unwrap();
        assert_eq!(slot.load().count(), 5);

        cart.clear();
        slot.save(&cart).unwrap();
        assert!(slot.load().is_empty());
    }

    #[test]
    fn test_clear_deletes_slot() {
        let store = Arc::new(Store::memory());
        let slot = CartSlot::new(store.clone());

        let mut cart = Cart::new();
        cart.add(item("7", SizeVariant::G50, 1, 80.0));
        slot.save(&cart).unwrap();

        slot.clear().unwrap();
        assert!(!store.exists(CART_KEY).unwrap());
        assert!(slot.load().is_empty());
    }
}
