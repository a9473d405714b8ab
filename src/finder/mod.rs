//! Restaurants near a location, through the proximity cache.
//!
//! Flow per lookup:
//! 1. Derive the geohash cell key from the request location.
//! 2. If the cache is available and holds the cell, return it verbatim.
//! 3. Otherwise scan every restaurant, keep the open ones strictly inside the radius.
//! 4. If the cache is available, overwrite the cell with the result (empty lists included).
//!
//! A hit is not re-filtered against the caller's radius or time, so an entry
//! written by a peak-hour request is served unchanged off-peak until it is
//! overwritten or expires.

pub mod filter;


pub use filter::ServingFilter;

use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheStatus, ProximityCache};
use crate::error::DiscoveryResult;
use crate::geo::spatial_key;
use crate::model::RestaurantView;
use crate::store::RestaurantStore;

/// Result of a proximity lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityLookup {
    restaurants: Vec<RestaurantView>,
    status: CacheStatus,
    key: String,
}

impl ProximityLookup {
    pub fn restaurants(&self) -> &[RestaurantView] {
        &self.restaurants
    }

    pub fn into_restaurants(self) -> Vec<RestaurantView> {
        self.restaurants
    }

    pub fn status(&self) -> CacheStatus {
        self.status
    }

    /// Geohash cell the lookup was keyed on.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Finds open restaurants near a point, mediated by a [`ProximityCache`].
pub struct RestaurantFinder<S: RestaurantStore> {
    store: Arc<S>,
    cache: ProximityCache,
}

impl<S: RestaurantStore> std::fmt::Debug for RestaurantFinder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantFinder")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<S: RestaurantStore> RestaurantFinder<S> {
    pub fn new(store: Arc<S>, cache: ProximityCache) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn cache(&self) -> &ProximityCache {
        &self.cache
    }

    #[instrument(skip(self), fields(key = tracing::field::Empty, status = tracing::field::Empty))]
    pub async fn find_close_by(
        &self,
        latitude: f64,
        longitude: f64,
        time: NaiveTime,
        radius_km: f64,
    ) -> DiscoveryResult<ProximityLookup> {
        let key = spatial_key(latitude, longitude);
        tracing::Span::current().record("key", tracing::field::display(&key));

        let cache_available = self.cache.is_available().await;
        if cache_available {
            if let Some(restaurants) = self.cache.get(&key).await {
                info!(restaurants = restaurants.len(), "Proximity cache hit");
                return Ok(self.finish(restaurants, CacheStatus::Hit, key));
            }
            debug!("Proximity cache miss, scanning record store");
        } else {
            debug!("Proximity cache unavailable, scanning record store");
        }

        let filter = ServingFilter::new(latitude, longitude, time, radius_km);
        let records = self.store.find_all().await?;
        let scanned = records.len();
        let restaurants = filter.apply(records);

        debug!(
            scanned = scanned,
            matched = restaurants.len(),
            "Record store scan complete"
        );

        if !cache_available {
            return Ok(self.finish(restaurants, CacheStatus::Bypass, key));
        }

        if let Err(e) = self.cache.put(&key, &restaurants).await {
            warn!(error = %e, "Failed to populate proximity cache");
        }

        Ok(self.finish(restaurants, CacheStatus::Miss, key))
    }

    fn finish(
        &self,
        restaurants: Vec<RestaurantView>,
        status: CacheStatus,
        key: String,
    ) -> ProximityLookup {
        tracing::Span::current().record("status", status.as_header_value());
        ProximityLookup {
            restaurants,
            status,
            key,
        }
    }
}
