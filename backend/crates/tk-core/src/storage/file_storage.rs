//! File-backed key-value storage.
//!
//! All keys live in one JSON object document, e.g.
//!
//! ```json
//! {
//!   "tickets": "[{\"id\":\"1\",\"title\":\"A\",\"status\":\"open\",\"createdAt\":\"t1\"}]",
//!   "ticketapp_user": "{\"email\":\"a@b.c\",\"password\":\"pw\"}"
//! }
//! ```
//!
//! Values are opaque strings, exactly as a browser would keep them.
//!
//! ## Concurrent writers
//!
//! Each write re-reads the document, applies the single change and replaces
//! the file through a temp-file rename. Two processes writing different keys
//! will usually both land; two processes writing the same key are last-write-wins.

use crate::{CoreError, KeyValueStorage, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;
use log::debug;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStorage {
    /// Open the storage document at `path`.
    ///
    /// A missing file is an empty storage; it is created on the first write.
    /// The parent directory is created if needed.
    pub fn open(path: impl Into<PathBuf>) -> CoreErrorResult<Self> {
        let path = path.into();
        Self::ensure_parent_dir(&path)?;

        let entries = Self::read_entries(&path)?;
        debug!(
            "Opened storage {} ({} keys)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn ensure_parent_dir(path: &Path) -> CoreErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| CoreError::StorageIo {
                path: dir.to_path_buf(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;
        }
        Ok(())
    }

    fn read_entries(path: &Path) -> CoreErrorResult<Entries> {
        if !path.exists() {
            return Ok(Entries::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::StorageIo {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| CoreError::StorageFormat {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn write_entries(path: &Path, entries: &Entries) -> CoreErrorResult<()> {
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            CoreError::StorageFormat {
                path: path.to_path_buf(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(|e| CoreError::StorageIo {
            path: tmp_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::rename(&tmp_path, path).map_err(|e| CoreError::StorageIo {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn lock(&self) -> CoreErrorResult<MutexGuard<'_, Entries>> {
        self.entries.lock().map_err(|_| CoreError::StoragePoisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reload from disk, apply `change`, write back and refresh the cache.
    fn modify(&self, change: impl FnOnce(&mut Entries)) -> CoreErrorResult<()> {
        let mut cached = self.lock()?;

        let mut entries = Self::read_entries(&self.path)?;
        change(&mut entries);
        Self::write_entries(&self.path, &entries)?;

        *cached = entries;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> CoreErrorResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> CoreErrorResult<()> {
        debug!("Storage write: {key} ({} bytes)", value.len());
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> CoreErrorResult<()> {
        debug!("Storage remove: {key}");
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}
