//! Typed access to the stored user record.

use std::sync::Arc;

use super::{RecordStore, StoreError};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::form::UserData;

/// Typed user record provider.
///
/// Wraps a `RecordStore` with JSON serialization of [`UserData`]. Only one
/// record is kept: saving replaces whatever was stored under the key.
#[derive(Clone)]
pub struct UserRecords {
    store: Arc<dyn RecordStore>,
    key: String,
}

impl UserRecords {
    /// Create a provider storing under the default `user` key.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a provider storing under a custom key.
    pub fn with_key(store: Arc<dyn RecordStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.store)
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Store the record, replacing any previous one.
    pub fn save(&self, user: &UserData) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        self.store.set_item(&self.key, &json)
    }

    /// Load the stored record, if any.
    pub fn load(&self) -> Result<Option<UserData>, StoreError> {
        match self.store.get_item(&self.key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Remove the stored record.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove_item(&self.key)
    }
}

impl std::fmt::Debug for UserRecords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecords").field("key", &self.key).finish()
    }
}
