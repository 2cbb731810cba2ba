//! Persisted key-value storage.
//!
//! Every store in the application reads and writes whole string values under
//! a fixed key (see [`storage_keys`]). The semantics mirror browser local
//! storage: a flat string-to-string map, last write wins, no transactions.

pub mod file_storage;
pub mod memory_storage;
pub mod storage_keys;

use crate::Result as CoreErrorResult;

use std::sync::Arc;

/// A flat string-to-string map that outlives the process (or not, for the
/// in-memory backend).
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when the key has never been written or was removed.
    fn get_item(&self, key: &str) -> CoreErrorResult<Option<String>>;

    /// Overwrites any existing value.
    fn set_item(&self, key: &str, value: &str) -> CoreErrorResult<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> CoreErrorResult<()>;
}

/// Handle shared by every store built at the application root.
pub type SharedStorage = Arc<dyn KeyValueStorage>;
