//! Nearbite library crate (used by the server binary and integration tests).
//!
//! Finds restaurants that are open and close to a location, either by plain
//! proximity (mediated by a geohash-keyed write-through cache) or by free-text
//! search over restaurant and menu fields.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`RestaurantService`], [`GetRestaurantsRequest`], [`GetRestaurantsResponse`] - Request surface
//! - [`RestaurantRecord`], [`MenuRecord`], [`RestaurantView`] - Data model
//!
//! ## Discovery
//! - [`RestaurantFinder`] - Proximity lookup through the cache
//! - [`SearchAggregator`] - Four-predicate search with ordered dedup
//! - [`ServingPolicy`] - Peak-hour aware serving radius
//!
//! ## Infrastructure
//! - [`ProximityCache`], [`CacheBackend`], [`MokaCacheBackend`] - Cache layer
//! - [`RestaurantStore`], [`InMemoryStore`] - Record store
//! - [`distance_km`], [`spatial_key`] - Geo helpers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod error;
pub mod finder;
pub mod gateway;
pub mod geo;
pub mod model;
pub mod policy;
pub mod search;
pub mod service;
pub mod store;

pub use cache::{
    CacheBackend, CacheError, CacheResult, CacheStatus, DisabledCacheBackend, MokaCacheBackend,
    NEARBITE_CACHE_HEADER, NEARBITE_STATUS_HEADER, ProximityCache, build_cache_backend,
};
#[cfg(any(test, feature = "mock"))]
pub use cache::MockCacheBackend;

pub use config::{Config, ConfigError};
pub use error::{DiscoveryError, DiscoveryResult};
pub use finder::{ProximityLookup, RestaurantFinder, ServingFilter};
pub use geo::{EARTH_RADIUS_KM, GEOHASH_PRECISION, distance_km, spatial_key};
pub use model::{
    ItemRecord, MenuRecord, ModelError, OpeningHours, RestaurantRecord, RestaurantView,
};
pub use policy::{NORMAL_HOURS_SERVING_RADIUS_KM, PEAK_HOURS_SERVING_RADIUS_KM, ServingPolicy};
pub use search::SearchAggregator;
pub use service::{GetRestaurantsRequest, GetRestaurantsResponse, RestaurantService};

#[cfg(any(test, feature = "mock"))]
pub use store::MockRestaurantStore;
pub use store::{InMemoryStore, RestaurantStore, SearchPattern, StoreError, StoreResult};
