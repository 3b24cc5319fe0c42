//! String key-value stores holding the client session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dashmap::DashMap;

use crate::error::CatalogError;

/// Persistent string key-value storage, the equivalent of a browser's
/// `localStorage`.
pub trait SessionStorage {
    /// Returns the value for `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Inserts or overwrites `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError>;

    /// Removes every key.
    fn clear(&self) -> Result<(), CatalogError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        (**self).set(key, value)
    }

    fn clear(&self) -> Result<(), CatalogError> {
        (**self).clear()
    }
}

/// Thread-safe in-memory storage. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    store: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.store.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CatalogError> {
        self.store.clear();
        Ok(())
    }
}

/// Storage backed by a single JSON object file of string values.
///
/// Every read goes to disk. A missing or malformed file reads as empty
/// storage; writes replace the whole file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return BTreeMap::new(),
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(
                "Ignoring malformed session file {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn clear(&self) -> Result<(), CatalogError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
