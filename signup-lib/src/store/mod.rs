//! Record storage for registered users.
//!
//! A [`RecordStore`] is a string key/value store in the spirit of browser
//! local storage. [`UserRecords`] wraps one with JSON serialization of
//! [`UserData`](crate::UserData).

mod memory;
mod records;
mod sqlite;

pub use memory::InMemoryStore;
pub use records::UserRecords;
pub use sqlite::SqliteStore;

pub use crate::error::StoreError;

/// Backend trait for record storage.
///
/// Implementations handle raw string storage/retrieval.
/// `UserRecords` wraps this with typed serialization.
pub trait RecordStore: Send + Sync {
    /// Get the value stored under a key.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value under a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
