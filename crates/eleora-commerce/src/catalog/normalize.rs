//! Normalization of loosely-shaped catalog rows.
//!
//! The hosted data store is forgiving about what lands in a product row:
//! `prices` and `size_images` are sometimes JSON objects and sometimes
//! JSON-encoded strings of one, and `highlights` is either an array or a
//! single comma-separated string. Rather than coercing ad hoc at each read
//! site, rows deserialize into [`RawProduct`] and are normalized exactly
//! once, when the catalog is loaded.

use crate::catalog::{Product, SizeImages, SizePrices, SizeVariant};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A product row as stored, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub use_case: String,
    #[serde(default)]
    pub image_url: String,
    /// Object or JSON-encoded string of one.
    #[serde(default)]
    pub prices: Value,
    /// Object, JSON-encoded string of one, or absent.
    #[serde(default)]
    pub size_images: Value,
    /// Array of strings or a single comma-separated string.
    #[serde(default)]
    pub highlights: Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

impl RawProduct {
    /// Coerce this row into a well-typed [`Product`].
    ///
    /// Never fails: unparseable prices degrade to 0.0 per size, unusable
    /// image or highlight data is dropped.
    pub fn normalize(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            description: self.description,
            use_case: self.use_case,
            image_url: self.image_url,
            prices: normalize_prices(self.prices),
            size_images: normalize_size_images(self.size_images),
            highlights: normalize_highlights(self.highlights),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl From<Product> for RawProduct {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            short_name: p.short_name,
            description: p.description,
            use_case: p.use_case,
            image_url: p.image_url,
            prices: serde_json::to_value(&p.prices).unwrap_or(Value::Null),
            size_images: serde_json::to_value(&p.size_images).unwrap_or(Value::Null),
            highlights: serde_json::to_value(&p.highlights).unwrap_or(Value::Null),
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}

/// Unwrap one level of JSON-string encoding, if present.
fn unwrap_encoded(value: Value) -> Value {
    match value {
        Value::String(s) => serde_json::from_str(&s).unwrap_or(Value::Null),
        other => other,
    }
}

fn normalize_prices(value: Value) -> SizePrices {
    let mut prices = SizePrices::default();
    if let Value::Object(map) = unwrap_encoded(value) {
        for size in SizeVariant::ALL {
            let price = map
                .get(size.as_str())
                .and_then(Value::as_f64)
                .filter(|p| p.is_finite() && *p >= 0.0)
                .unwrap_or(0.0);
            prices.set(size, price);
        }
    }
    prices
}

fn normalize_size_images(value: Value) -> SizeImages {
    let mut images = SizeImages::default();
    if let Value::Object(map) = unwrap_encoded(value) {
        for size in SizeVariant::ALL {
            let url = map
                .get(size.as_str())
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            match size {
                SizeVariant::G50 => images.g50 = url,
                SizeVariant::G100 => images.g100 = url,
                SizeVariant::G200 => images.g200 = url,
                SizeVariant::G500 => images.g500 = url,
            }
        }
    }
    images
}

fn normalize_highlights(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.trim().to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(prices: Value, size_images: Value, highlights: Value) -> RawProduct {
        RawProduct {
            id: ProductId::new("7"),
            name: "Wild Forest Honey".to_string(),
            short_name: "Honey".to_string(),
            description: String::new(),
            use_case: String::new(),
            image_url: "honey.jpg".to_string(),
            prices,
            size_images,
            highlights,
            is_active: true,
            created_at: 0,
        }
    }

    #[test]
    fn test_prices_from_object() {
        let product = raw(
            json!({"50g": 80, "100g": 150, "200g": 280, "500g": 650}),
            Value::Null,
            Value::Null,
        )
        .normalize();

        assert_eq!(product.prices.g50, 80.0);
        assert_eq!(product.prices.g500, 650.0);
    }

    #[test]
    fn test_prices_from_encoded_string() {
        let product = raw(
            json!("{\"50g\": 80, \"100g\": 150}"),
            Value::Null,
            Value::Null,
        )
        .normalize();

        assert_eq!(product.prices.g100, 150.0);
        // Sizes missing from the row price at 0.
        assert_eq!(product.prices.g200, 0.0);
        assert_eq!(product.prices.g500, 0.0);
    }

    #[test]
    fn test_garbage_prices_degrade() {
        let product = raw(json!("not json at all"), Value::Null, Value::Null).normalize();
        assert_eq!(product.prices, SizePrices::default());

        let product = raw(json!({"100g": "free", "200g": -1}), Value::Null, Value::Null).normalize();
        assert_eq!(product.prices.g100, 0.0);
        assert_eq!(product.prices.g200, 0.0);
    }

    #[test]
    fn test_highlights_from_array() {
        let product = raw(
            Value::Null,
            Value::Null,
            json!(["Raw", " Unfiltered ", ""]),
        )
        .normalize();
        assert_eq!(product.highlights, vec!["Raw", "Unfiltered"]);
    }

    #[test]
    fn test_highlights_from_comma_string() {
        let product = raw(Value::Null, Value::Null, json!("Raw, Unfiltered,Single origin")).normalize();
        assert_eq!(
            product.highlights,
            vec!["Raw", "Unfiltered", "Single origin"]
        );
    }

    #[test]
    fn test_size_images() {
        let product = raw(
            Value::Null,
            json!({"100g": "honey-100.jpg", "200g": ""}),
            Value::Null,
        )
        .normalize();

        assert_eq!(product.size_images.g100.as_deref(), Some("honey-100.jpg"));
        assert_eq!(product.size_images.g200, None);
    }

    #[test]
    fn test_round_trip_through_raw() {
        let original = raw(
            json!({"50g": 80, "100g": 150, "200g": 280, "500g": 650}),
            json!({"100g": "honey-100.jpg"}),
            json!(["Raw"]),
        )
        .normalize();

        let back = RawProduct::from(original.clone()).normalize();
        assert_eq!(back, original);
    }
}
