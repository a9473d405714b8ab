//! Mock record store with call counting and failure injection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::error::{StoreError, StoreResult};
use super::memory::InMemoryStore;
use super::{MenuField, RestaurantField, RestaurantStore, SearchPattern};
use crate::model::{MenuRecord, RestaurantRecord};

#[derive(Debug, Clone, Default)]
pub struct MockRestaurantStore {
    inner: InMemoryStore,
    find_all_calls: Arc<AtomicUsize>,
    pattern_calls: Arc<AtomicUsize>,
    by_id_calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockRestaurantStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn with_records(restaurants: Vec<RestaurantRecord>, menus: Vec<MenuRecord>) -> Self {
        Self::new(InMemoryStore::with_records(restaurants, menus))
    }

    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    /// Makes every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    /// Calls to `find_restaurants_matching` and `find_menus_matching`.
    pub fn pattern_calls(&self) -> usize {
        self.pattern_calls.load(Ordering::SeqCst)
    }

    pub fn by_id_calls(&self) -> usize {
        self.by_id_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "mock store set to fail".to_string(),
            });
        }
        Ok(())
    }
}

impl RestaurantStore for MockRestaurantStore {
    async fn find_all(&self) -> StoreResult<Vec<RestaurantRecord>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_all().await
    }

    async fn find_restaurants_matching(
        &self,
        field: RestaurantField,
        pattern: &SearchPattern,
    ) -> StoreResult<Vec<RestaurantRecord>> {
        self.pattern_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_restaurants_matching(field, pattern).await
    }

    async fn find_menus_matching(
        &self,
        field: MenuField,
        pattern: &SearchPattern,
    ) -> StoreResult<Vec<MenuRecord>> {
        self.pattern_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_menus_matching(field, pattern).await
    }

    async fn find_restaurant_by_id(&self, restaurant_id: &str) -> StoreResult<Option<RestaurantRecord>> {
        self.by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_restaurant_by_id(restaurant_id).await
    }
}
