//! Product and size-variant types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Package size variant.
///
/// The catalog carries exactly these four sizes; every product defines a
/// price per size (missing source data is normalized to 0, see
/// [`super::RawProduct`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeVariant {
    #[serde(rename = "50g")]
    G50,
    #[serde(rename = "100g")]
    G100,
    #[serde(rename = "200g")]
    G200,
    #[serde(rename = "500g")]
    G500,
}

impl SizeVariant {
    /// All variants, in catalog display order.
    pub const ALL: [SizeVariant; 4] = [
        SizeVariant::G50,
        SizeVariant::G100,
        SizeVariant::G200,
        SizeVariant::G500,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeVariant::G50 => "50g",
            SizeVariant::G100 => "100g",
            SizeVariant::G200 => "200g",
            SizeVariant::G500 => "500g",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "50g" => Some(SizeVariant::G50),
            "100g" => Some(SizeVariant::G100),
            "200g" => Some(SizeVariant::G200),
            "500g" => Some(SizeVariant::G500),
            _ => None,
        }
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-size unit prices for a product.
///
/// All four keys are always present; 0.0 marks a size the catalog row did
/// not price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizePrices {
    #[serde(rename = "50g", default)]
    pub g50: f64,
    #[serde(rename = "100g", default)]
    pub g100: f64,
    #[serde(rename = "200g", default)]
    pub g200: f64,
    #[serde(rename = "500g", default)]
    pub g500: f64,
}

impl SizePrices {
    pub fn get(&self, size: SizeVariant) -> f64 {
        match size {
            SizeVariant::G50 => self.g50,
            SizeVariant::G100 => self.g100,
            SizeVariant::G200 => self.g200,
            SizeVariant::G500 => self.g500,
        }
    }

    pub fn set(&mut self, size: SizeVariant, price: f64) {
        match size {
            SizeVariant::G50 => self.g50 = price,
            SizeVariant::G100 => self.g100 = price,
            SizeVariant::G200 => self.g200 = price,
            SizeVariant::G500 => self.g500 = price,
        }
    }
}

/// Optional per-size image overrides for a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeImages {
    #[serde(rename = "50g", default, skip_serializing_if = "Option::is_none")]
    pub g50: Option<String>,
    #[serde(rename = "100g", default, skip_serializing_if = "Option::is_none")]
    pub g100: Option<String>,
    #[serde(rename = "200g", default, skip_serializing_if = "Option::is_none")]
    pub g200: Option<String>,
    #[serde(rename = "500g", default, skip_serializing_if = "Option::is_none")]
    pub g500: Option<String>,
}

impl SizeImages {
    pub fn get(&self, size: SizeVariant) -> Option<&str> {
        match size {
            SizeVariant::G50 => self.g50.as_deref(),
            SizeVariant::G100 => self.g100.as_deref(),
            SizeVariant::G200 => self.g200.as_deref(),
            SizeVariant::G500 => self.g500.as_deref(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Full display name.
    pub name: String,
    /// Short name used on cards, cart lines, and order snapshots.
    pub short_name: String,
    /// Full description.
    pub description: String,
    /// Suggested use copy.
    pub use_case: String,
    /// Primary image reference.
    pub image_url: String,
    /// Per-size unit prices.
    pub prices: SizePrices,
    /// Per-size image overrides.
    #[serde(default)]
    pub size_images: SizeImages,
    /// Marketing highlight bullets.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Whether the product is visible in the storefront.
    pub is_active: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new active product with the given prices.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        short_name: impl Into<String>,
        prices: SizePrices,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: short_name.into(),
            description: String::new(),
            use_case: String::new(),
            image_url: String::new(),
            prices,
            size_images: SizeImages::default(),
            highlights: Vec::new(),
            is_active: true,
            created_at: current_timestamp(),
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.is_active
    }

    /// Unit price for a size.
    ///
    /// Degrades to 0.0 for unpriced or garbage data so catalog pages render
    /// instead of failing; the checkout boundary refuses zero-priced lines
    /// before they can reach an order total.
    pub fn price_for(&self, size: SizeVariant) -> f64 {
        let price = self.prices.get(size);
        if price.is_finite() && price >= 0.0 {
            price
        } else {
            0.0
        }
    }

    /// Image for a size, falling back to the product image.
    pub fn image_for(&self, size: SizeVariant) -> &str {
        self.size_images.get(size).unwrap_or(&self.image_url)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
