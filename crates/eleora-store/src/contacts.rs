//! Contact-page message store.
//!
//! Messages land here from the storefront contact form and are read back
//! by the admin inbox.

use crate::kv::Store;
use crate::{store_key, StoreError};
use eleora_commerce::ids::ContactId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const CONTACT_PREFIX: &str = "contact";

/// A message submitted through the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Unix timestamp of submission.
    pub created_at: i64,
}

impl ContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: ContactId::generate(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            created_at: current_timestamp(),
        }
    }
}

/// Persistence interface for contact messages.
pub trait ContactStore {
    fn insert(&self, message: &ContactMessage) -> Result<(), StoreError>;

    /// All messages, newest first.
    fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;
}

/// Contact store keeping one document per message.
pub struct JsonContactStore {
    store: Arc<Store>,
}

impl JsonContactStore {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl ContactStore for JsonContactStore {
    fn insert(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.store
            .set(&store_key!(CONTACT_PREFIX, message.id), message)
    }

    fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let prefix = format!("{}:", CONTACT_PREFIX);
        let mut messages = Vec::new();
        for key in self.store.keys()? {
            if key.starts_with(&prefix) {
                if let Some(message) = self.store.get::<ContactMessage>(&key)? {
                    messages.push(message);
                }
            }
        }
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
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
