//! Shopping cart module.
//!
//! Contains the cart, its line items, and the two-state view of it that
//! drives checkout gating.

mod cart;

pub use cart::{Cart, CartState, LineItem};
