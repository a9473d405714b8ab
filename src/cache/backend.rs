//! Key/value cache backends.
//!
//! `MokaCacheBackend` keeps entries in process. `DisabledCacheBackend` reports
//! itself unavailable so every lookup goes to the record store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;

use super::error::{CacheError, CacheResult};

/// String key/value operations required by [`super::ProximityCache`].
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns `true` if the backend can currently serve requests.
    async fn is_available(&self) -> bool;
    /// Returns `true` if `key` has a value.
    async fn exists(&self, key: &str) -> CacheResult<bool>;
    /// Returns the value for `key`, if any.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> CacheResult<()>;
}

/// In-process backend on top of a bounded moka cache.
pub struct MokaCacheBackend {
    entries: Cache<String, String>,
    available: AtomicBool,
}

impl MokaCacheBackend {
    pub const DEFAULT_CAPACITY: u64 = 10_000;

    /// Creates a backend with the default capacity and no expiry.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY, None)
    }

    /// Creates a backend holding at most `capacity` cells, each living at most `ttl`.
    pub fn with_capacity(capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            entries: builder.build(),
            available: AtomicBool::new(true),
        }
    }

    /// Marks the backend reachable or unreachable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }

    fn ensure_available(&self) -> CacheResult<()> {
        if self.available.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(CacheError::Unavailable)
        }
    }
}

impl Default for MokaCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MokaCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheBackend")
            .field("entries", &self.entries.entry_count())
            .field("available", &self.available.load(Ordering::Relaxed))
            .finish()
    }
}

#[async_trait]
impl CacheBackend for MokaCacheBackend {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        self.ensure_available()?;
        Ok(self.entries.contains_key(key))
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.ensure_available()?;
        Ok(self.entries.get(key))
    }

    async fn set(&self, key: &str, value: String) -> CacheResult<()> {
        self.ensure_available()?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Backend used when caching is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCacheBackend;

#[async_trait]
impl CacheBackend for DisabledCacheBackend {
    async fn is_available(&self) -> bool {
        false
    }

    async fn exists(&self, _key: &str) -> CacheResult<bool> {
        Err(CacheError::Unavailable)
    }

    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Unavailable)
    }

    async fn set(&self, _key: &str, _value: String) -> CacheResult<()> {
        Err(CacheError::Unavailable)
    }
}
