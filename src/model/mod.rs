//! Restaurant and menu records plus the serialized view returned to callers.
//!
//! Records are owned by the external store and read-only here. [`RestaurantView`]
//! is the projection that goes to clients and into the proximity cache.

pub mod error;

pub use error::{ModelError, ModelResult};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Parses a stored time of day (`HH:MM` or `HH:MM:SS`).
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

/// Restaurant document as stored in the `restaurants` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: String,
    pub closes_at: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl RestaurantRecord {
    /// Parses `opens_at`/`closes_at`.
    pub fn opening_hours(&self) -> ModelResult<OpeningHours> {
        let opens_at = self.parse_time(&self.opens_at)?;
        let closes_at = self.parse_time(&self.closes_at)?;
        Ok(OpeningHours {
            opens_at,
            closes_at,
        })
    }

    fn parse_time(&self, value: &str) -> ModelResult<NaiveTime> {
        parse_time_of_day(value).map_err(|source| ModelError::InvalidTime {
            restaurant_id: self.restaurant_id.clone(),
            value: value.to_string(),
            source,
        })
    }
}

/// Same-day opening window. Overnight windows are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
}

impl OpeningHours {
    /// Strictly after opening and strictly before closing.
    #[inline]
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        time > self.opens_at && time < self.closes_at
    }
}

/// Menu item as embedded in a [`MenuRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// Menu document as stored in the `menus` collection.
///
/// `restaurant_id` refers to a [`RestaurantRecord`] but is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub restaurant_id: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// Restaurant as returned to clients and stored in the proximity cache.
///
/// Equality is full-field, including attribute order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantView {
    pub restaurant_id: String,
    pub name: String,
    pub city: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: String,
    pub closes_at: String,
    pub attributes: Vec<String>,
}

impl From<&RestaurantRecord> for RestaurantView {
    fn from(record: &RestaurantRecord) -> Self {
        Self {
            restaurant_id: record.restaurant_id.clone(),
            name: record.name.clone(),
            city: record.city.clone(),
            image_url: record.image_url.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            opens_at: record.opens_at.clone(),
            closes_at: record.closes_at.clone(),
            attributes: record.attributes.clone(),
        }
    }
}

impl From<RestaurantRecord> for RestaurantView {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            restaurant_id: record.restaurant_id,
            name: record.name,
            city: record.city,
            image_url: record.image_url,
            latitude: record.latitude,
            longitude: record.longitude,
            opens_at: record.opens_at,
            closes_at: record.closes_at,
            attributes: record.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RestaurantRecord {
        RestaurantRecord {
            restaurant_id: "10".to_string(),
            name: "A2B".to_string(),
            city: "Hsr Layout".to_string(),
            image_url: "www.google.com".to_string(),
            latitude: 20.027,
            longitude: 30.0,
            opens_at: "18:00".to_string(),
            closes_at: "23:00".to_string(),
            attributes: vec!["Tamil".to_string(), "South Indian".to_string()],
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = RestaurantView::from(&record());
        let json = serde_json::to_value(&view).expect("serialize");

        assert_eq!(json["restaurantId"], "10");
        assert_eq!(json["imageUrl"], "www.google.com");
        assert_eq!(json["opensAt"], "18:00");
        assert_eq!(json["closesAt"], "23:00");
        assert_eq!(json["latitude"], 20.027);
        assert_eq!(json["attributes"][1], "South Indian");
    }

    #[test]
    fn test_view_ignores_unknown_fields() {
        let json = r#"{
            "restaurantId": "10", "name": "A2B", "city": "Hsr Layout",
            "imageUrl": "www.google.com", "latitude": 20.027, "longitude": 30.0,
            "opensAt": "18:00", "closesAt": "23:00", "attributes": ["Tamil"],
            "rating": 4.5
        }"#;

        let view: RestaurantView = serde_json::from_str(json).expect("deserialize");
        assert_eq!(view.name, "A2B");
        assert_eq!(view.attributes, vec!["Tamil".to_string()]);
    }

    #[test]
    fn test_record_optional_fields_default() {
        let json = r#"{
            "restaurantId": "7", "name": "Bare", "latitude": 1.0, "longitude": 2.0,
            "opensAt": "09:00", "closesAt": "17:00"
        }"#;

        let record: RestaurantRecord = serde_json::from_str(json).expect("deserialize");
        assert!(record.city.is_empty());
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn test_view_equality_respects_attribute_order() {
        let a = RestaurantView::from(&record());
        let mut b = a.clone();
        assert_eq!(a, b);

        b.attributes.reverse();
        assert_ne!(a, b);
    }

    #[test]
    fn test_opening_hours_strict_bounds() {
        let hours = record().opening_hours().expect("valid hours");

        assert!(!hours.is_open_at(at(17, 59)));
        assert!(!hours.is_open_at(at(18, 0)));
        assert!(hours.is_open_at(at(18, 1)));
        assert!(hours.is_open_at(at(22, 59)));
        assert!(!hours.is_open_at(at(23, 0)));
    }

    #[test]
    fn test_opening_hours_accepts_seconds() {
        let mut r = record();
        r.opens_at = "18:00:30".to_string();
        let hours = r.opening_hours().expect("valid hours");
        assert_eq!(hours.opens_at, NaiveTime::from_hms_opt(18, 0, 30).expect("valid"));
    }

    #[test]
    fn test_invalid_time_reports_record() {
        let mut r = record();
        r.closes_at = "late".to_string();

        match r.opening_hours() {
            Err(ModelError::InvalidTime {
                restaurant_id,
                value,
                ..
            }) => {
                assert_eq!(restaurant_id, "10");
                assert_eq!(value, "late");
            }
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }
}
