//! String-keyed persistent storage
//!
//! The stores only need get/set of text values under a handful of fixed keys.
//! `FileStore` keeps one JSON file per key; `MemoryStore` is an in-process map
//! for tests and throwaway sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::error::{SpendError, SpendResult};

use super::file_io::{read_if_exists, write_atomic};

pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if nothing was ever stored
    fn get(&self, key: &str) -> SpendResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> SpendResult<()>;
}

/// One file per key under a directory: `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SpendResult<Option<String>> {
        read_if_exists(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> SpendResult<()> {
        write_atomic(self.path_for(key), value)
    }
}

/// In-memory store
///
/// `set_failing(true)` makes every call return a storage error, which lets
/// tests drive the fallback paths of the stores.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> SpendResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(SpendError::Storage("storage unavailable".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SpendResult<Option<String>> {
        self.check()?;
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SpendResult<()> {
        self.check()?;
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
