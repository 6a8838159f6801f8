//! Order store.

use crate::kv::Store;
use crate::{store_key, StoreError};
use eleora_commerce::checkout::{Order, OrderStatus, PaymentStatus};
use eleora_commerce::ids::OrderId;
use std::sync::Arc;

const ORDER_PREFIX: &str = "order";

/// Persistence interface for placed orders.
pub trait OrderStore {
    /// Persist a newly placed order.
    fn insert(&self, order: &Order) -> Result<(), StoreError>;

    /// Look up one order.
    fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;

    /// All orders, newest first (admin view).
    fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Update an order's status (admin).
    fn set_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError>;

    /// Update an order's payment status.
    fn set_payment_status(&self, id: &OrderId, status: PaymentStatus) -> Result<(), StoreError>;
}

/// Order store keeping one document per order.
pub struct JsonOrderStore {
    store: Arc<Store>,
}

impl JsonOrderStore {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn key(id: &OrderId) -> String {
        store_key!(ORDER_PREFIX, id)
    }

    fn update(
        &self,
        id: &OrderId,
        apply: impl FnOnce(&mut Order),
    ) -> Result<(), StoreError> {
        let mut order = self
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        apply(&mut order);
        self.store.set(&Self::key(id), &order)
    }
}

impl OrderStore for JsonOrderStore {
    fn insert(&self, order: &Order) -> Result<(), StoreError> {
        self.store.set(&Self::key(&order.id), order)
    }

    fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        self.store.get(&Self::key(id))
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let prefix = format!("{}:", ORDER_PREFIX);
        let mut orders = Vec::new();
        for key in self.store.keys()? {
            if key.starts_with(&prefix) {
                if let Some(order) = self.store.get::<Order>(&key)? {
                    orders.push(order);
                }
            }
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    fn set_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError> {
        self.update(id, |order| order.set_status(status))
    }

    fn set_payment_status(&self, id: &OrderId, status: PaymentStatus) -> Result<(), StoreError> {
        self.update(id, |order| order.set_payment_status(status))
    }
}
