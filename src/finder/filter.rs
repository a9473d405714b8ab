//! Open-now and within-radius predicate shared by proximity and search.

use chrono::NaiveTime;
use tracing::warn;

use crate::geo::distance_km;
use crate::model::{RestaurantRecord, RestaurantView};

/// Admits a restaurant iff it is open at `time` and strictly closer than
/// `radius_km` to the request location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub time: NaiveTime,
    pub radius_km: f64,
}

impl ServingFilter {
    pub fn new(latitude: f64, longitude: f64, time: NaiveTime, radius_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            time,
            radius_km,
        }
    }

    /// Records with unparsable opening hours are rejected and logged.
    pub fn admits(&self, record: &RestaurantRecord) -> bool {
        let hours = match record.opening_hours() {
            Ok(hours) => hours,
            Err(e) => {
                warn!(
                    restaurant_id = %record.restaurant_id,
                    error = %e,
                    "Skipping restaurant with malformed opening hours"
                );
                return false;
            }
        };

        if !hours.is_open_at(self.time) {
            return false;
        }

        distance_km(
            self.latitude,
            self.longitude,
            record.latitude,
            record.longitude,
        ) < self.radius_km
    }

    /// Keeps admitted records, in order, as views.
    pub fn apply<I>(&self, records: I) -> Vec<RestaurantView>
    where
        I: IntoIterator<Item = RestaurantRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.admits(record))
            .map(RestaurantView::from)
            .collect()
    }
}
