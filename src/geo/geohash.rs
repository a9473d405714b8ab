//! Base32 geohash encoding used as the proximity cache key.
//!
//! Bits alternate longitude/latitude starting with longitude, five bits per
//! character. Every point inside a cell encodes to the same string at that
//! precision, so nearby requests share one cache entry.

/// Characters per cache key (~153m x 153m cells).
///
/// Fixed: changing it changes the cell size and silently invalidates every key.
pub const GEOHASH_PRECISION: usize = 7;

const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Latitude/longitude extent of a geohash cell (half-open on the upper edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CellBounds {
    /// Centre point as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Returns `true` if the point falls inside the cell.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat < self.max_lat && lon >= self.min_lon && lon < self.max_lon
    }
}

/// Encodes `(lat, lon)` as a geohash of `precision` characters.
///
/// Coordinates are not validated.
pub fn encode(lat: f64, lon: f64, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut even_bit = true;
    let mut bits = 0u8;
    let mut idx = 0usize;

    while hash.len() < precision {
        let (range, value) = if even_bit {
            (&mut lon_range, lon)
        } else {
            (&mut lat_range, lat)
        };

        let mid = (range.0 + range.1) / 2.0;
        idx <<= 1;
        if value >= mid {
            idx |= 1;
            range.0 = mid;
        } else {
            range.1 = mid;
        }

        even_bit = !even_bit;
        bits += 1;
        if bits == 5 {
            hash.push(BASE32[idx] as char);
            bits = 0;
            idx = 0;
        }
    }

    hash
}

/// Cache key for a request location at [`GEOHASH_PRECISION`].
#[inline]
pub fn spatial_key(lat: f64, lon: f64) -> String {
    encode(lat, lon, GEOHASH_PRECISION)
}

/// Decodes a geohash into the bounds of its cell.
///
/// Returns `None` for an empty hash or one containing a non-geohash character.
pub fn cell_bounds(hash: &str) -> Option<CellBounds> {
    if hash.is_empty() {
        return None;
    }

    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut even_bit = true;

    for c in hash.bytes() {
        let idx = BASE32.iter().position(|&b| b == c.to_ascii_lowercase())?;
        for shift in (0..5).rev() {
            let bit = (idx >> shift) & 1;
            let range = if even_bit {
                &mut lon_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if bit == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            even_bit = !even_bit;
        }
    }

    Some(CellBounds {
        min_lat: lat_range.0,
        max_lat: lat_range.1,
        min_lon: lon_range.0,
        max_lon: lon_range.1,
    })
}
