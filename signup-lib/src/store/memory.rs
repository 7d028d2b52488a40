//! In-memory record store using DashMap

use dashmap::DashMap;

use super::{RecordStore, StoreError};

/// A record store backed by a concurrent hash map.
///
/// Data is lost when the process exits.
///
/// # Example
///
/// ```
/// use signup_lib::store::{InMemoryStore, RecordStore};
///
/// let store = InMemoryStore::new();
/// store.set_item("user", "{}").unwrap();
/// assert_eq!(store.get_item("user").unwrap().as_deref(), Some("{}"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecordStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = InMemoryStore::new();
        store.set_item("user", "a").unwrap();
        store.set_item("user", "b").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_item("user").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::new();
        store.set_item("user", "a").unwrap();
        store.remove_item("user").unwrap();
        store.remove_item("missing").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get_item("user").unwrap(), None);
    }
}
