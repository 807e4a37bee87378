//! Read-through cache of loaded datasets
//!
//! Datasets never change after load, so entries are shared as `Arc<Dataset>`
//! and only the map itself sits behind a lock. Entries live until
//! [`DatasetCache::invalidate`] or [`DatasetCache::clear`] is called; there is
//! no expiry. A failed load is returned to the caller and not cached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

use crate::error::{Error, Result};
use crate::import;
use crate::models::Dataset;

/// Cache key: the pair of files a dataset was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    pub production: PathBuf,
    pub rainfall: PathBuf,
}

impl DatasetKey {
    pub fn new(production: impl Into<PathBuf>, rainfall: impl Into<PathBuf>) -> Self {
        Self {
            production: production.into(),
            rainfall: rainfall.into(),
        }
    }
}

/// Thread-safe cache of loaded datasets
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<DatasetKey, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache instance
    pub fn global() -> &'static DatasetCache {
        static GLOBAL: OnceLock<DatasetCache> = OnceLock::new();
        GLOBAL.get_or_init(DatasetCache::new)
    }

    /// Return the cached dataset for these files, loading it on a miss
    pub fn get_or_load(&self, production: &Path, rainfall: &Path) -> Result<Arc<Dataset>> {
        self.get_or_fetch(DatasetKey::new(production, rainfall), || {
            import::load(production, rainfall)
        })
    }

    /// Return the cached dataset for `key`, calling `fetch` on a miss
    pub fn get_or_fetch<F>(&self, key: DatasetKey, fetch: F) -> Result<Arc<Dataset>>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        if let Some(dataset) = self.get(&key)? {
            debug!(production = %key.production.display(), "Dataset cache hit");
            return Ok(dataset);
        }

        debug!(production = %key.production.display(), "Dataset cache miss");
        let dataset = Arc::new(fetch()?);

        let mut entries = self.write()?;
        // Another caller may have loaded the same files meanwhile; keep the first
        let cached = entries.entry(key).or_insert(dataset);
        Ok(Arc::clone(cached))
    }

    /// Cached dataset for `key`, if present
    pub fn get(&self, key: &DatasetKey) -> Result<Option<Arc<Dataset>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::InvalidData("Failed to acquire dataset cache lock".into()))?;
        Ok(entries.get(key).cloned())
    }

    /// Drop one entry so the next lookup re-reads the files
    pub fn invalidate(&self, production: &Path, rainfall: &Path) -> Result<bool> {
        let key = DatasetKey::new(production, rainfall);
        Ok(self.write()?.remove(&key).is_some())
    }

    /// Drop every entry
    pub fn clear(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::InvalidData("Failed to acquire dataset cache lock".into()))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<DatasetKey, Arc<Dataset>>>> {
        self.entries
            .write()
            .map_err(|_| Error::InvalidData("Failed to acquire dataset cache lock".into()))
    }
}
