//! Product catalog module.
//!
//! Contains the product record, the fixed size-variant set, and the
//! normalization step for loosely-shaped catalog rows.

mod normalize;
mod product;

pub use normalize::RawProduct;
pub use product::{Product, SizeImages, SizePrices, SizeVariant};
