use std::sync::Arc;

use super::backend::{CacheBackend, DisabledCacheBackend, MokaCacheBackend};
use super::mock::MockCacheBackend;
use super::proximity::ProximityCache;
use super::types::CacheStatus;
use crate::geo::spatial_key;
use crate::model::RestaurantView;

fn view(id: &str, name: &str) -> RestaurantView {
    RestaurantView {
        restaurant_id: id.to_string(),
        name: name.to_string(),
        city: "Hsr Layout".to_string(),
        image_url: "www.google.com".to_string(),
        latitude: 12.9121,
        longitude: 77.6446,
        opens_at: "18:00".to_string(),
        closes_at: "23:00".to_string(),
        attributes: vec!["Tamil".to_string(), "South Indian".to_string()],
    }
}

#[test]
fn test_cache_status_header_values() {
    assert_eq!(CacheStatus::Hit.as_header_value(), "HIT");
    assert_eq!(CacheStatus::Miss.as_header_value(), "MISS");
    assert_eq!(CacheStatus::Bypass.as_header_value(), "BYPASS");
    assert_eq!(format!("{}", CacheStatus::Miss), "MISS");
}

#[test]
fn test_cache_status_is_hit() {
    assert!(CacheStatus::Hit.is_hit());
    assert!(!CacheStatus::Miss.is_hit());
    assert!(!CacheStatus::Bypass.is_hit());
}

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let cache = ProximityCache::new(Arc::new(MokaCacheBackend::new()));
    let key = spatial_key(12.9121, 77.6446);
    let views = vec![view("1", "A2B"), view("2", "Meghana Foods")];

    cache.put(&key, &views).await.expect("put");

    assert!(cache.contains(&key).await);
    assert_eq!(cache.get(&key).await, Some(views));
}

#[tokio::test]
async fn test_empty_list_is_cached() {
    let cache = ProximityCache::new(Arc::new(MokaCacheBackend::new()));
    cache.put("tdr1y0c", &[]).await.expect("put");
    assert_eq!(cache.get("tdr1y0c").await, Some(Vec::new()));
}

#[tokio::test]
async fn test_put_overwrites() {
    let cache = ProximityCache::new(Arc::new(MokaCacheBackend::new()));
    cache.put("k", &[view("1", "Old")]).await.expect("put");
    cache.put("k", &[view("2", "New")]).await.expect("put");

    let cached = cache.get("k").await.expect("present");
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].name, "New");
}

#[tokio::test]
async fn test_absent_key_is_none() {
    let cache = ProximityCache::new(Arc::new(MokaCacheBackend::new()));
    assert!(cache.get("nothing").await.is_none());
    assert!(!cache.contains("nothing").await);
}

#[tokio::test]
async fn test_malformed_payload_reads_as_miss() {
    let backend = Arc::new(MockCacheBackend::new());
    backend.insert_raw("k", "{\"not\": \"a list\"");
    let cache = ProximityCache::new(backend.clone());

    assert!(cache.get("k").await.is_none());
    assert_eq!(backend.get_calls(), 1);
}

#[tokio::test]
async fn test_payload_is_camel_case_json() {
    let backend = Arc::new(MockCacheBackend::new());
    let cache = ProximityCache::new(backend.clone());
    cache.put("k", &[view("10", "A2B")]).await.expect("put");

    let raw = backend.raw("k").expect("stored");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json[0]["restaurantId"], "10");
    assert_eq!(json[0]["imageUrl"], "www.google.com");
}

#[tokio::test]
async fn test_backend_errors_are_absorbed_on_read() {
    let cache = ProximityCache::new(Arc::new(DisabledCacheBackend));
    assert!(!cache.is_available().await);
    assert!(cache.get("k").await.is_none());
    assert!(!cache.contains("k").await);
    assert!(cache.put("k", &[]).await.is_err());
}

#[tokio::test]
async fn test_availability_follows_backend() {
    let backend = Arc::new(MokaCacheBackend::new());
    let cache = ProximityCache::new(backend.clone());
    assert!(cache.is_available().await);

    backend.set_available(false);
    assert!(!cache.is_available().await);
    assert!(!cache.backend().is_available().await);
}
