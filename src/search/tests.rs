use std::sync::Arc;

use chrono::NaiveTime;

use super::{SearchAggregator, dedup_preserving_order};
use crate::error::DiscoveryError;
use crate::geo::EARTH_RADIUS_KM;
use crate::model::{ItemRecord, MenuRecord, RestaurantRecord, RestaurantView};
use crate::store::MockRestaurantStore;

const ORIGIN: (f64, f64) = (12.9121, 77.6446);

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn km_east(km: f64) -> (f64, f64) {
    let km_per_degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
    (ORIGIN.0, ORIGIN.1 + km / (km_per_degree * ORIGIN.0.to_radians().cos()))
}

fn restaurant(id: &str, name: &str, attributes: &[&str], km: f64) -> RestaurantRecord {
    let (latitude, longitude) = km_east(km);
    RestaurantRecord {
        restaurant_id: id.to_string(),
        name: name.to_string(),
        city: "Hsr Layout".to_string(),
        image_url: String::new(),
        latitude,
        longitude,
        opens_at: "07:00".to_string(),
        closes_at: "23:30".to_string(),
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
    }
}

fn menu(restaurant_id: &str, items: &[(&str, &[&str])]) -> MenuRecord {
    MenuRecord {
        restaurant_id: restaurant_id.to_string(),
        items: items
            .iter()
            .map(|(name, attributes)| ItemRecord {
                name: name.to_string(),
                attributes: attributes.iter().map(|a| a.to_string()).collect(),
            })
            .collect(),
    }
}

fn fixture() -> Arc<MockRestaurantStore> {
    Arc::new(MockRestaurantStore::with_records(
        vec![
            restaurant("1", "Biryani Blues", &["Hyderabadi"], 1.0),
            restaurant("2", "Meghana Foods", &["Andhra", "Biryani"], 1.5),
            restaurant("3", "Truffles", &["American", "Burgers"], 2.0),
            restaurant("4", "Paradise", &["Hyderabadi"], 0.5),
            restaurant("5", "Far Biryani Palace", &["Mughlai"], 12.0),
        ],
        vec![
            menu("3", &[("Chicken Biryani Burger", &["Fusion"])]),
            menu("4", &[("Haleem", &["Biryani Side"])]),
            menu("99", &[("Orphan Biryani", &[])]),
            menu("1", &[("Mutton Biryani", &["Spicy"])]),
        ],
    ))
}

fn ids(views: &[RestaurantView]) -> Vec<&str> {
    views.iter().map(|v| v.restaurant_id.as_str()).collect()
}

#[tokio::test]
async fn test_empty_query_returns_nothing() {
    let store = fixture();
    let aggregator = SearchAggregator::new(store.clone());

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "", at(12, 0), 5.0)
        .await
        .expect("search");

    assert!(results.is_empty());
    assert_eq!(store.pattern_calls(), 0);
    assert_eq!(store.find_all_calls(), 0);
}

#[tokio::test]
async fn test_merge_order_and_dedup() {
    let aggregator = SearchAggregator::new(fixture());

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "biryani", at(12, 0), 5.0)
        .await
        .expect("search");

    // name: 1 (5 is out of range); attributes: 2; item name: 3, 1 (dup);
    // item attributes: 4.
    assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_name_and_attribute_match_appears_once_at_name_position() {
    let store = Arc::new(MockRestaurantStore::with_records(
        vec![
            restaurant("a", "Dosa Corner", &["Idli"], 1.0),
            restaurant("b", "Dosa Camp", &["South Indian"], 1.0),
            restaurant("c", "Idli House", &["Dosa"], 1.0),
        ],
        Vec::new(),
    ));
    let aggregator = SearchAggregator::new(store);

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "dosa", at(12, 0), 5.0)
        .await
        .expect("search");
    assert_eq!(ids(&results), vec!["a", "b", "c"]);

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "IDLI", at(12, 0), 5.0)
        .await
        .expect("search");
    assert_eq!(ids(&results), vec!["c", "a"]);
}

#[tokio::test]
async fn test_every_branch_applies_radius_and_hours() {
    let aggregator = SearchAggregator::new(fixture());

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "biryani", at(12, 0), 1.2)
        .await
        .expect("search");
    assert_eq!(ids(&results), vec!["1", "4"]);

    let closed = aggregator
        .search(ORIGIN.0, ORIGIN.1, "biryani", at(6, 0), 50.0)
        .await
        .expect("search");
    assert!(closed.is_empty());
}

#[tokio::test]
async fn test_unknown_menu_restaurant_is_skipped() {
    let store = fixture();
    let aggregator = SearchAggregator::new(store.clone());

    let results = aggregator
        .search(ORIGIN.0, ORIGIN.1, "orphan", at(12, 0), 5.0)
        .await
        .expect("search");

    assert!(results.is_empty());
    assert_eq!(store.by_id_calls(), 1);
}

#[tokio::test]
async fn test_runs_four_predicate_queries() {
    let store = fixture();
    let aggregator = SearchAggregator::new(store.clone());

    aggregator
        .search(ORIGIN.0, ORIGIN.1, "haleem", at(12, 0), 5.0)
        .await
        .expect("search");

    assert_eq!(store.pattern_calls(), 4);
    assert_eq!(store.find_all_calls(), 0);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let store = fixture();
    store.set_failing(true);
    let aggregator = SearchAggregator::new(store);

    let err = aggregator
        .search(ORIGIN.0, ORIGIN.1, "biryani", at(12, 0), 5.0)
        .await
        .expect_err("store failure");
    assert!(matches!(err, DiscoveryError::Store(_)));
}

#[test]
fn test_dedup_uses_full_field_equality() {
    let base = RestaurantView::from(&restaurant("1", "Biryani Blues", &["A", "B"], 1.0));
    let mut reordered = base.clone();
    reordered.attributes.reverse();

    let merged = dedup_preserving_order(vec![
        base.clone(),
        reordered.clone(),
        base.clone(),
        reordered.clone(),
    ]);

    assert_eq!(merged, vec![base, reordered]);
}
