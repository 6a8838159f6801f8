//! Product catalog store.
//!
//! Rows persist in their loose wire shape ([`RawProduct`]) and are
//! normalized exactly once, on the way out.

use crate::kv::Store;
use crate::StoreError;
use eleora_commerce::catalog::{Product, RawProduct};
use eleora_commerce::ids::ProductId;
use std::sync::Arc;

/// Key holding the product rows.
pub const PRODUCTS_KEY: &str = "products";

/// Query interface over the product catalog.
pub trait ProductCatalog {
    /// All products visible in the storefront.
    fn list_active(&self) -> Result<Vec<Product>, StoreError>;

    /// Every product, including deactivated ones (admin view).
    fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Look up one product.
    fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert or replace a product (admin).
    fn upsert(&self, product: Product) -> Result<(), StoreError>;

    /// Toggle storefront visibility (admin).
    fn set_active(&self, id: &ProductId, active: bool) -> Result<(), StoreError>;
}

/// Catalog backed by a JSON document in the store.
pub struct JsonCatalog {
    store: Arc<Store>,
}

impl JsonCatalog {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn load_raw(&self) -> Result<Vec<RawProduct>, StoreError> {
        Ok(self.store.get(PRODUCTS_KEY)?.unwrap_or_default())
    }

    fn save_raw(&self, rows: &[RawProduct]) -> Result<(), StoreError> {
        self.store.set(PRODUCTS_KEY, &rows)
    }
}

impl ProductCatalog for JsonCatalog {
    fn list_active(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(Product::is_available)
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .load_raw()?
            .into_iter()
            .map(RawProduct::normalize)
            .collect())
    }

    fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.list_all()?.into_iter().find(|p| p.id == *id))
    }

    fn upsert(&self, product: Product) -> Result<(), StoreError> {
        let mut rows = self.load_raw()?;
        let raw = RawProduct::from(product);
        match rows.iter_mut().find(|r| r.id == raw.id) {
            Some(existing) => *existing = raw,
            None => rows.push(raw),
        }
        self.save_raw(&rows)
    }

    fn set_active(&self, id: &ProductId, active: bool) -> Result<(), StoreError> {
        let mut rows = self.load_raw()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.is_active = active;
        self.save_raw(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eleora_commerce::catalog::{SizePrices, SizeVariant};
    use serde_json::json;

    fn catalog() -> JsonCatalog {
        JsonCatalog::new(Arc::new(Store::memory()))
    }

    fn product(id: &str, name: &str) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            name,
            SizePrices {
                g50: 80.0,
                g100: 150.0,
                g200: 280.0,
                g500: 650.0,
            },
        )
    }

    #[test]
    fn test_empty_catalog() {
        assert!(catalog().list_active().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_and_get() {
        let catalog = catalog();
        catalog.upsert(product("7", "Wild Forest Honey")).unwrap();

        let loaded = catalog.get(&ProductId::new("7")).unwrap().unwrap();
        assert_eq!(loaded.name, "Wild Forest Honey");
        assert_eq!(loaded.price_for(SizeVariant::G100), 150.0);

        // Replacing keeps a single row.
        let mut updated = product("7", "Wild Forest Honey");
        updated.prices.g100 = 175.0;
        catalog.upsert(updated).unwrap();

        let all = catalog.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].price_for(SizeVariant::G100), 175.0);
    }

    #[test]
    fn test_list_active_filters() {
        let catalog = catalog();
        catalog.upsert(product("7", "Honey")).unwrap();
        catalog.upsert(product("8", "Ghee")).unwrap();
        catalog.set_active(&ProductId::new("8"), false).unwrap();

        let active = catalog.list_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, ProductId::new("7"));

        assert_eq!(catalog.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_set_active_unknown_product() {
        let err = catalog().set_active(&ProductId::new("999"), false).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_loose_rows_normalize_on_load() {
        let store = Arc::new(Store::memory());
        // A row as the hosted store sometimes delivers it: encoded price
        // string, comma-separated highlights.
        store
            .set(
                PRODUCTS_KEY,
                &json!([{
                    "id": "7",
                    "name": "Wild Forest Honey",
                    "short_name": "Honey",
                    "prices": "{\"50g\": 80, \"100g\": 150}",
                    "highlights": "Raw, Unfiltered",
                    "is_active": true,
                    "created_at": 0
                }]),
            )
            .unwrap();

        let catalog = JsonCatalog::new(store);
        let loaded = catalog.get(&ProductId::new("7")).unwrap().unwrap();
        assert_eq!(loaded.price_for(SizeVariant::G100), 150.0);
        assert_eq!(loaded.price_for(SizeVariant::G500), 0.0);
        assert_eq!(loaded.highlights, vec!["Raw", "Unfiltered"]);
    }
}
