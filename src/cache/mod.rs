//! Proximity cache: geohash cell -> serialized restaurant list.

pub mod backend;
pub mod error;
pub mod factory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod proximity;
pub mod types;

#[cfg(test)]
mod proximity_tests;

pub use backend::{CacheBackend, DisabledCacheBackend, MokaCacheBackend};
pub use error::{CacheError, CacheResult};
pub use factory::build_cache_backend;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCacheBackend;
pub use proximity::ProximityCache;
pub use types::{
    CacheStatus, NEARBITE_CACHE_HEADER, NEARBITE_STATUS_HEADER, NEARBITE_STATUS_HEALTHY,
    NEARBITE_STATUS_READY, NEARBITE_STATUS_UNAVAILABLE,
};
