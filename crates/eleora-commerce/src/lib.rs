//! E-commerce domain types and logic for the Eleora storefront.
//!
//! This crate provides the storefront's core types:
//!
//! - **Catalog**: products with four fixed package sizes, per-size prices
//!   and images, and a normalization step for loosely-shaped catalog rows
//! - **Cart**: the session cart and pricing engine (add/remove/update,
//!   totals, counts)
//! - **Checkout**: customer details and order snapshots, with the
//!   zero-price and empty-cart guards at the order boundary
//! - **Money**: whole-rupee formatting and paise conversion
//!
//! # Example
//!
//! ```rust,ignore
//! use eleora_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(LineItem::new(product.clone(), SizeVariant::G100, 2,
//!     product.price_for(SizeVariant::G100)));
//!
//! println!("Total: {}", format_currency(Some(cart.total())));
//!
//! let order = Order::from_cart(&cart, customer, None, PaymentMethod::Cod)?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_currency, format_price, to_minor_units, RUPEE};

    // Catalog
    pub use crate::catalog::{Product, RawProduct, SizeImages, SizePrices, SizeVariant};

    // Cart
    pub use crate::cart::{Cart, CartState, LineItem};

    // Checkout
    pub use crate::checkout::{
        CustomerDetails, Order, OrderLineItem, OrderStatus, PaymentMethod, PaymentStatus,
    };
}
