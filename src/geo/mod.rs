//! Great-circle distance and spatial cell keys.

pub mod geohash;

pub use geohash::{CellBounds, GEOHASH_PRECISION, cell_bounds, encode, spatial_key};

/// Mean Earth radius (WGS84 approximation) in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Haversine distance between two points in kilometres.
///
/// Inputs are WGS84 degrees and are not validated; out-of-range values propagate
/// as NaN or meaningless distances.
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
