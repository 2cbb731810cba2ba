use crate::{CoreError, KeyValueStorage, Result as CoreErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> CoreErrorResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CoreErrorResult<bool> {
        Ok(self.read()?.is_empty())
    }

    #[track_caller]
    fn read(&self) -> CoreErrorResult<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries.read().map_err(|_| CoreError::StoragePoisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write(&self) -> CoreErrorResult<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries.write().map_err(|_| CoreError::StoragePoisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CoreErrorResult<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> CoreErrorResult<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> CoreErrorResult<()> {
        self.write()?.remove(key);
        Ok(())
    }
}
