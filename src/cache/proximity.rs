//! Geohash cell -> restaurant list cache.
//!
//! Values are JSON arrays of [`RestaurantView`]. There is no per-key locking:
//! two concurrent misses for one cell both compute and both write, and the last
//! write wins.

use std::sync::Arc;

use tracing::{debug, warn};

use super::backend::CacheBackend;
use super::error::CacheResult;
use crate::model::RestaurantView;

#[derive(Clone)]
/// Typed view over a [`CacheBackend`] for proximity results.
pub struct ProximityCache {
    backend: Arc<dyn CacheBackend>,
}

impl ProximityCache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn CacheBackend> {
        &self.backend
    }

    /// Returns `true` if the backend is reachable. When `false`, callers must not
    /// use [`get`](Self::get) or [`put`](Self::put).
    pub async fn is_available(&self) -> bool {
        self.backend.is_available().await
    }

    /// Returns `true` if the cell has an entry. Backend errors read as `false`.
    pub async fn contains(&self, key: &str) -> bool {
        match self.backend.exists(key).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(key = key, error = %e, "Cache existence check failed");
                false
            }
        }
    }

    /// Returns the cached list for `key`.
    ///
    /// Absence, backend errors and undecodable payloads all read as `None`; the
    /// latter two are logged.
    pub async fn get(&self, key: &str) -> Option<Vec<RestaurantView>> {
        let payload = match self.backend.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str::<Vec<RestaurantView>>(&payload) {
            Ok(views) => {
                debug!(key = key, restaurants = views.len(), "Decoded cached cell");
                Some(views)
            }
            Err(e) => {
                warn!(
                    key = key,
                    payload_len = payload.len(),
                    error = %e,
                    "Cached payload is malformed, treating as miss"
                );
                None
            }
        }
    }

    /// Serializes `views` and overwrites the entry for `key`.
    pub async fn put(&self, key: &str, views: &[RestaurantView]) -> CacheResult<()> {
        let payload = serde_json::to_string(views)?;
        self.backend.set(key, payload).await
    }
}

impl std::fmt::Debug for ProximityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProximityCache").finish_non_exhaustive()
    }
}
