//! Request-level operations consumed by the HTTP layer.
//!
//! Each call picks its serving radius once from [`ServingPolicy`] and returns a
//! fresh response value.

use std::sync::Arc;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cache::{CacheStatus, ProximityCache};
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::finder::RestaurantFinder;
use crate::model::RestaurantView;
use crate::policy::ServingPolicy;
use crate::search::SearchAggregator;
use crate::store::RestaurantStore;

/// Location plus optional free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRestaurantsRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub search_for: Option<String>,
}

impl GetRestaurantsRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            search_for: None,
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_for = Some(query.into());
        self
    }

    /// Latitude in `[-90, 90]`, longitude in `[-180, 180]`, both finite.
    pub fn validate(&self) -> DiscoveryResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DiscoveryError::InvalidRequest {
                reason: format!("latitude {} is outside [-90, 90]", self.latitude),
            });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DiscoveryError::InvalidRequest {
                reason: format!("longitude {} is outside [-180, 180]", self.longitude),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRestaurantsResponse {
    pub restaurants: Vec<RestaurantView>,
    /// Set for proximity lookups only.
    #[serde(skip)]
    pub cache_status: Option<CacheStatus>,
}

impl GetRestaurantsResponse {
    pub fn new(restaurants: Vec<RestaurantView>) -> Self {
        Self {
            restaurants,
            cache_status: None,
        }
    }
}

/// Restaurant discovery: proximity listing and free-text search.
pub struct RestaurantService<S: RestaurantStore> {
    finder: RestaurantFinder<S>,
    aggregator: SearchAggregator<S>,
    policy: ServingPolicy,
}

impl<S: RestaurantStore> std::fmt::Debug for RestaurantService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantService")
            .field("finder", &self.finder)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<S: RestaurantStore> RestaurantService<S> {
    pub fn new(store: Arc<S>, cache: ProximityCache, policy: ServingPolicy) -> Self {
        Self {
            finder: RestaurantFinder::new(store.clone(), cache),
            aggregator: SearchAggregator::new(store),
            policy,
        }
    }

    pub fn finder(&self) -> &RestaurantFinder<S> {
        &self.finder
    }

    pub fn policy(&self) -> &ServingPolicy {
        &self.policy
    }

    /// Open restaurants within the serving radius for `current_time`.
    #[instrument(skip(self, request), fields(lat = request.latitude, lon = request.longitude))]
    pub async fn find_all_restaurants_close_by(
        &self,
        request: &GetRestaurantsRequest,
        current_time: NaiveTime,
    ) -> DiscoveryResult<GetRestaurantsResponse> {
        request.validate()?;
        let radius_km = self.policy.serving_radius_km(current_time);

        let lookup = self
            .finder
            .find_close_by(request.latitude, request.longitude, current_time, radius_km)
            .await?;

        let status = lookup.status();
        Ok(GetRestaurantsResponse {
            restaurants: lookup.into_restaurants(),
            cache_status: Some(status),
        })
    }

    /// Open restaurants within the serving radius matching `search_for`.
    ///
    /// A missing query is treated as empty and yields no restaurants.
    #[instrument(skip(self, request), fields(lat = request.latitude, lon = request.longitude))]
    pub async fn find_restaurants_by_search_query(
        &self,
        request: &GetRestaurantsRequest,
        current_time: NaiveTime,
    ) -> DiscoveryResult<GetRestaurantsResponse> {
        request.validate()?;
        let radius_km = self.policy.serving_radius_km(current_time);
        let query = request.search_for.as_deref().unwrap_or_default();

        let restaurants = self
            .aggregator
            .search(
                request.latitude,
                request.longitude,
                query,
                current_time,
                radius_km,
            )
            .await?;

        Ok(GetRestaurantsResponse::new(restaurants))
    }
}
