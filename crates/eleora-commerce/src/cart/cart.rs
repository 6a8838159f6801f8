//! Cart and line item types.

use crate::catalog::{Product, SizeVariant};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Carries the full product record so the entry survives later catalog
/// edits, and the unit price captured at add time. Identity is the
/// (product id, size) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product being purchased.
    pub product: Product,
    /// Selected package size.
    pub size: SizeVariant,
    /// Quantity.
    pub quantity: u32,
    /// Unit price captured when the item was added.
    pub unit_price: f64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(product: Product, size: SizeVariant, quantity: u32, unit_price: f64) -> Self {
        Self {
            product,
            size,
            quantity,
            unit_price,
        }
    }

    /// Total for this line (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    fn matches(&self, product_id: &ProductId, size: SizeVariant) -> bool {
        self.product.id == *product_id && self.size == size
    }
}

/// Externally meaningful cart states.
///
/// Checkout redirects back to the cart view whenever it observes `Empty`;
/// there are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    Populated,
}

/// A shopping cart: one per browsing session.
///
/// Holds at most one line item per (product id, size) pair. All mutation
/// goes through [`add`](Cart::add), [`remove`](Cart::remove),
/// [`update_quantity`](Cart::update_quantity), and [`clear`](Cart::clear);
/// callers persist through their cart slot after each mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rehydrate a cart from persisted line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Add an item to the cart.
    ///
    /// An add with an existing (product id, size) key increments that
    /// line's quantity; the stored unit price wins over the incoming one.
    /// Keeping the first-seen price avoids repricing an already-combined
    /// line mid-session; whether a re-add at a new catalog price should
    /// instead update the line is an open product question.
    ///
    /// Input validation (quantity ≥ 1, price ≥ 0) is the caller's
    /// responsibility; the storefront views clamp before calling.
    pub fn add(&mut self, item: LineItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&item.product.id, item.size))
        {
            existing.quantity += item.quantity;
            return;
        }
        self.items.push(item);
    }

    /// Remove the line matching the key. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId, size: SizeVariant) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !i.matches(product_id, size));
        self.items.len() < len_before
    }

    /// Set the matching line's quantity to an absolute value.
    ///
    /// A quantity of 0 behaves exactly like [`remove`](Cart::remove).
    /// No-op if the key is absent.
    pub fn update_quantity(&mut self, product_id: &ProductId, size: SizeVariant, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id, size);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.matches(product_id, size)) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price × quantity over all lines, in collection order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of unique line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cart state.
    pub fn state(&self) -> CartState {
        if self.count() == 0 {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    /// Get a line item by key.
    pub fn get(&self, product_id: &ProductId, size: SizeVariant) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(product_id, size))
    }

    /// All line items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart and return its line items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}
