//! In-process record store loaded from a JSON snapshot directory.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::error::{StoreError, StoreResult};
use super::{MenuField, RestaurantField, RestaurantStore, SearchPattern};
use crate::model::{MenuRecord, RestaurantRecord};

/// Snapshot file holding the `restaurants` collection.
pub const RESTAURANTS_FILE: &str = "restaurants.json";
/// Snapshot file holding the `menus` collection.
pub const MENUS_FILE: &str = "menus.json";

#[derive(Debug, Default)]
struct Collections {
    restaurants: Vec<RestaurantRecord>,
    menus: Vec<MenuRecord>,
}

/// Record store held in memory. Records keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(restaurants: Vec<RestaurantRecord>, menus: Vec<MenuRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections { restaurants, menus })),
        }
    }

    /// Loads `restaurants.json` and (optionally) `menus.json` from `dir`.
    ///
    /// A missing menus file yields an empty menu collection.
    pub async fn load_from_dir(dir: &Path) -> StoreResult<Self> {
        let restaurants: Vec<RestaurantRecord> = read_json(&dir.join(RESTAURANTS_FILE)).await?;

        let menus_path = dir.join(MENUS_FILE);
        let menus: Vec<MenuRecord> = if tokio::fs::try_exists(&menus_path).await.unwrap_or(false) {
            read_json(&menus_path).await?
        } else {
            warn!(path = %menus_path.display(), "Menu snapshot not found, item search will match nothing");
            Vec::new()
        };

        info!(
            restaurants = restaurants.len(),
            menus = menus.len(),
            dir = %dir.display(),
            "Loaded record snapshot"
        );

        Ok(Self::with_records(restaurants, menus))
    }

    pub fn insert_restaurant(&self, record: RestaurantRecord) {
        self.inner.write().restaurants.push(record);
    }

    pub fn insert_menu(&self, menu: MenuRecord) {
        self.inner.write().menus.push(menu);
    }

    pub fn restaurant_count(&self) -> usize {
        self.inner.read().restaurants.len()
    }

    pub fn menu_count(&self) -> usize {
        self.inner.read().menus.len()
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

impl RestaurantStore for InMemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<RestaurantRecord>> {
        Ok(self.inner.read().restaurants.clone())
    }

    async fn find_restaurants_matching(
        &self,
        field: RestaurantField,
        pattern: &SearchPattern,
    ) -> StoreResult<Vec<RestaurantRecord>> {
        Ok(self
            .inner
            .read()
            .restaurants
            .iter()
            .filter(|r| r.matches(field, pattern))
            .cloned()
            .collect())
    }

    async fn find_menus_matching(
        &self,
        field: MenuField,
        pattern: &SearchPattern,
    ) -> StoreResult<Vec<MenuRecord>> {
        Ok(self
            .inner
            .read()
            .menus
            .iter()
            .filter(|m| m.matches(field, pattern))
            .cloned()
            .collect())
    }

    async fn find_restaurant_by_id(&self, restaurant_id: &str) -> StoreResult<Option<RestaurantRecord>> {
        Ok(self
            .inner
            .read()
            .restaurants
            .iter()
            .find(|r| r.restaurant_id == restaurant_id)
            .cloned())
    }
}
