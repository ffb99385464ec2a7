//! Durable key-value storage for resolved terminology.
//!
//! The cache map is loaded once at startup and rewritten in full after
//! every new entry. A single process must own the file for the duration
//! of a run; concurrent writers are last-writer-wins on the final rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TerminologyError};

/// One cached resolution. Name keys carry `rxcui`; `ingredient:<rxcui>`
/// keys carry the ingredient pair. `Some("")` is the cached-negative
/// sentinel: the service was asked and had no match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rxcui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_rxcui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,
}

pub type CacheMap = BTreeMap<String, CacheEntry>;

/// Durable storage strategy behind the terminology cache.
///
/// `load` must never fail: a corrupt or unreadable store is an empty
/// cache, not a fatal condition. `persist` writes the full map.
pub trait CacheStore {
    fn load(&self) -> CacheMap;
    fn persist(&self, entries: &CacheMap) -> Result<()>;
}

impl<S: CacheStore + ?Sized> CacheStore for std::sync::Arc<S> {
    fn load(&self) -> CacheMap {
        (**self).load()
    }

    fn persist(&self, entries: &CacheMap) -> Result<()> {
        (**self).persist(entries)
    }
}

/// JSON file store with atomic replace-on-write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self) -> CacheMap {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => {
                debug!(path = %self.path.display(), "no readable cache file; starting empty");
                return CacheMap::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "corrupt cache file; starting empty");
                CacheMap::new()
            }
        }
    }

    fn persist(&self, entries: &CacheMap) -> Result<()> {
        let persist_err = |source: std::io::Error| TerminologyError::Persist {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(persist_err)?;
        }
        let tmp = self.temp_path();
        let json = serde_json::to_vec_pretty(entries)?;
        fs::write(&tmp, json).map_err(persist_err)?;
        fs::rename(&tmp, &self.path).map_err(persist_err)?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs; records what was persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    initial: CacheMap,
    persisted: Mutex<Option<CacheMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(initial: CacheMap) -> Self {
        Self {
            initial,
            persisted: Mutex::new(None),
        }
    }

    /// The most recently persisted map, if any persist happened.
    pub fn last_persisted(&self) -> Option<CacheMap> {
        self.persisted.lock().expect("store lock").clone()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self) -> CacheMap {
        self.initial.clone()
    }

    fn persist(&self, entries: &CacheMap) -> Result<()> {
        *self.persisted.lock().expect("store lock") = Some(entries.clone());
        Ok(())
    }
}
