//! Free-text restaurant search across four predicates.
//!
//! Branches, in merge order: restaurant name, restaurant attributes, menu item
//! name, menu item attributes. Branches run concurrently; their results are
//! concatenated in that fixed order and then deduplicated keeping the first
//! occurrence, so the output does not depend on which branch finishes first.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::NaiveTime;
use futures_util::future::join_all;
use tracing::{debug, info, instrument};

use crate::error::DiscoveryResult;
use crate::finder::ServingFilter;
use crate::model::{RestaurantRecord, RestaurantView};
use crate::store::{MenuField, RestaurantField, RestaurantStore, SearchPattern};

/// Issues the four predicate searches and merges them.
pub struct SearchAggregator<S: RestaurantStore> {
    store: Arc<S>,
}

impl<S: RestaurantStore> std::fmt::Debug for SearchAggregator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAggregator").finish_non_exhaustive()
    }
}

impl<S: RestaurantStore> SearchAggregator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns open restaurants within `radius_km` matching `query`.
    ///
    /// An empty query returns an empty list without touching the store.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn search(
        &self,
        latitude: f64,
        longitude: f64,
        query: &str,
        time: NaiveTime,
        radius_km: f64,
    ) -> DiscoveryResult<Vec<RestaurantView>> {
        if query.is_empty() {
            debug!("Empty search query, returning no results");
            return Ok(Vec::new());
        }

        let pattern = SearchPattern::new(query);
        let filter = ServingFilter::new(latitude, longitude, time, radius_km);

        let (by_name, by_attributes, by_item_name, by_item_attributes) = tokio::join!(
            self.search_restaurants(RestaurantField::Name, &pattern, &filter),
            self.search_restaurants(RestaurantField::Attributes, &pattern, &filter),
            self.search_menus(MenuField::ItemName, &pattern, &filter),
            self.search_menus(MenuField::ItemAttributes, &pattern, &filter),
        );

        let (by_name, by_attributes, by_item_name, by_item_attributes) =
            (by_name?, by_attributes?, by_item_name?, by_item_attributes?);

        let branch_counts = [
            by_name.len(),
            by_attributes.len(),
            by_item_name.len(),
            by_item_attributes.len(),
        ];

        let combined: Vec<RestaurantView> = by_name
            .into_iter()
            .chain(by_attributes)
            .chain(by_item_name)
            .chain(by_item_attributes)
            .collect();
        let combined_len = combined.len();
        let merged = dedup_preserving_order(combined);

        info!(
            by_name = branch_counts[0],
            by_attributes = branch_counts[1],
            by_item_name = branch_counts[2],
            by_item_attributes = branch_counts[3],
            duplicates = combined_len - merged.len(),
            results = merged.len(),
            "Search merged"
        );

        Ok(merged)
    }

    async fn search_restaurants(
        &self,
        field: RestaurantField,
        pattern: &SearchPattern,
        filter: &ServingFilter,
    ) -> DiscoveryResult<Vec<RestaurantView>> {
        let records = self.store.find_restaurants_matching(field, pattern).await?;
        let matched = records.len();
        let views = filter.apply(records);
        debug!(
            field = field.field_path(),
            matched = matched,
            serviceable = views.len(),
            "Restaurant predicate searched"
        );
        Ok(views)
    }

    async fn search_menus(
        &self,
        field: MenuField,
        pattern: &SearchPattern,
        filter: &ServingFilter,
    ) -> DiscoveryResult<Vec<RestaurantView>> {
        let menus = self.store.find_menus_matching(field, pattern).await?;
        let matched = menus.len();
        let restaurants = self.resolve_restaurants(menus.iter().map(|m| m.restaurant_id.as_str())).await?;
        let views = filter.apply(restaurants);
        debug!(
            field = field.field_path(),
            matched = matched,
            serviceable = views.len(),
            "Menu predicate searched"
        );
        Ok(views)
    }

    /// Point lookups for each id, issued concurrently, results in input order.
    ///
    /// Ids with no restaurant are dropped.
    async fn resolve_restaurants<'a, I>(&self, ids: I) -> DiscoveryResult<Vec<RestaurantRecord>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lookups = ids.into_iter().map(|id| async move {
            let found = self.store.find_restaurant_by_id(id).await;
            (id, found)
        });

        let mut restaurants = Vec::new();
        for (id, found) in join_all(lookups).await {
            match found? {
                Some(record) => restaurants.push(record),
                None => debug!(restaurant_id = id, "Menu refers to unknown restaurant, skipping"),
            }
        }
        Ok(restaurants)
    }
}

/// Drops later duplicates (full-field equality), keeping first-seen order.
pub fn dedup_preserving_order(views: Vec<RestaurantView>) -> Vec<RestaurantView> {
    let mut unique: Vec<RestaurantView> = Vec::with_capacity(views.len());
    for view in views {
        if !unique.contains(&view) {
            unique.push(view);
        }
    }
    unique
}
