//! Test fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveTime;
use nearbite::geo::EARTH_RADIUS_KM;
use nearbite::model::{ItemRecord, MenuRecord, RestaurantRecord};

/// HSR Layout, Bengaluru.
pub const ORIGIN: (f64, f64) = (12.9121, 77.6446);

pub const DEFAULT_OPENS_AT: &str = "06:00";

pub const DEFAULT_CLOSES_AT: &str = "23:30";

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Point `km` due north of [`ORIGIN`].
pub fn km_north(km: f64) -> (f64, f64) {
    let km_per_degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
    (ORIGIN.0 + km / km_per_degree, ORIGIN.1)
}

#[derive(Default)]
pub struct RestaurantBuilder {
    id: String,
    name: Option<String>,
    city: Option<String>,
    position: Option<(f64, f64)>,
    opens_at: Option<String>,
    closes_at: Option<String>,
    attributes: Vec<String>,
}

impl RestaurantBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn km_north(mut self, km: f64) -> Self {
        self.position = Some(km_north(km));
        self
    }

    pub fn hours(mut self, opens_at: &str, closes_at: &str) -> Self {
        self.opens_at = Some(opens_at.to_string());
        self.closes_at = Some(closes_at.to_string());
        self
    }

    pub fn attribute(mut self, attribute: &str) -> Self {
        self.attributes.push(attribute.to_string());
        self
    }

    pub fn build(self) -> RestaurantRecord {
        let (latitude, longitude) = self.position.unwrap_or(ORIGIN);
        RestaurantRecord {
            name: self.name.unwrap_or_else(|| format!("Restaurant {}", self.id)),
            image_url: format!("https://images.nearbite.example/{}.jpg", self.id),
            restaurant_id: self.id,
            city: self.city.unwrap_or_else(|| "Hsr Layout".to_string()),
            latitude,
            longitude,
            opens_at: self.opens_at.unwrap_or_else(|| DEFAULT_OPENS_AT.to_string()),
            closes_at: self.closes_at.unwrap_or_else(|| DEFAULT_CLOSES_AT.to_string()),
            attributes: self.attributes,
        }
    }
}

pub fn menu(restaurant_id: &str, items: &[(&str, &[&str])]) -> MenuRecord {
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

pub fn restaurant_ids<T: AsRef<str>>(ids: impl IntoIterator<Item = T>) -> Vec<String> {
    ids.into_iter().map(|id| id.as_ref().to_string()).collect()
}
