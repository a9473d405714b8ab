//! Mock cache backend that records every call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::backend::CacheBackend;
use super::error::{CacheError, CacheResult};

pub struct MockCacheBackend {
    entries: RwLock<HashMap<String, String>>,
    available: AtomicBool,
    failing: AtomicBool,
    exists_calls: AtomicUsize,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

impl Default for MockCacheBackend {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            failing: AtomicBool::new(false),
            exists_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            set_calls: AtomicUsize::new(0),
        }
    }
}

impl MockCacheBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        let backend = Self::default();
        backend.set_available(false);
        backend
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes `exists`/`get`/`set` fail with a backend error while still
    /// reporting the backend as available.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Stores a raw payload without counting it as a `set` call.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> CacheResult<()> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable);
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::Backend {
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for MockCacheBackend {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.entries.read().contains_key(key))
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> CacheResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }
}
