use std::sync::Arc;

use tracing::info;

use super::backend::{CacheBackend, DisabledCacheBackend, MokaCacheBackend};
use crate::config::Config;

/// Builds the cache backend selected by `config`.
pub fn build_cache_backend(config: &Config) -> Arc<dyn CacheBackend> {
    if !config.cache_enabled {
        info!("Proximity cache disabled, all lookups go to the record store");
        return Arc::new(DisabledCacheBackend);
    }

    info!(
        capacity = config.cache_capacity,
        ttl_secs = config.cache_ttl.map(|ttl| ttl.as_secs()),
        "Proximity cache enabled"
    );
    Arc::new(MokaCacheBackend::with_capacity(
        config.cache_capacity,
        config.cache_ttl,
    ))
}
